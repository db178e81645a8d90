// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Turn: the animated page turn between two spreads.
//!
//! A turn lifts the outer page of the current spread, rotates it about the
//! spine and lays it down on the other side, revealing the destination
//! spread underneath. This crate models that without rendering anything:
//!
//! - [`TurnMachine`]: the idle/loading/animating/settling state machine, with
//!   a reentrancy guard and synchronous abort.
//! - [`TurnGeometry`]: the layout snapshot frozen when a turn starts.
//! - [`TurnPose`]: angle, lift, travel, scale, shadow and shading as a pure
//!   function of progress.
//! - [`LeafFace`]: which page the single-sided leaf shows at a given moment.
//!
//! The host drives time by calling [`TurnMachine::tick`] with a monotonic
//! timestamp from its frame loop.
//!
//! ## Minimal example
//!
//! ```rust
//! use flipbook_pagination::{Direction, Page, PageKind, PageSide, Pagination};
//! use flipbook_turn::{TurnGeometry, TurnMachine, TurnTick};
//! use kurbo::{Rect, Size};
//!
//! let pages = (0..8)
//!     .map(|n| Page::new(format!("p{n}"), n, PageKind::Article, PageSide::Left))
//!     .collect();
//! let pagination = Pagination::new(pages);
//! let target = pagination.label(3).unwrap();
//!
//! let geometry = TurnGeometry::measure(
//!     Size::new(900.0, 600.0),
//!     Some(Rect::new(40.0, 20.0, 440.0, 540.0)),
//!     Some(Rect::new(456.0, 20.0, 856.0, 540.0)),
//!     Direction::Next,
//! );
//!
//! let mut turn = TurnMachine::default();
//! turn.begin(Direction::Next, target.clone(), "spread 1_2", geometry).unwrap();
//! turn.supply("spread 3_4", 0);
//! assert!(matches!(turn.tick(700), TurnTick::Progress(_)));
//! assert_eq!(turn.tick(1400), TurnTick::Completed(target.clone()));
//! assert!(turn.confirm(&target));
//! ```

mod geometry;
mod machine;
mod pose;

pub use geometry::TurnGeometry;
pub use machine::{
    DEFAULT_TURN_DURATION_MS, TurnMachine, TurnPhase, TurnRejected, TurnScene, TurnTick,
};
pub use pose::{GradientDirection, LEAF_DEPTH, LeafFace, TurnPose};
