// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Timing: host-agnostic animation clock primitives.
//!
//! Animations in the flipbook engine are pure functions of time. Hosts own
//! the real frame loop (a browser animation frame, a winit redraw, a test
//! loop) and feed monotonic millisecond timestamps into the engine. This crate
//! provides the small pieces that model relies on:
//!
//! - [`ease_in_out_cubic`]: the shared easing curve.
//! - [`Tween`]: a fixed-duration time window with linear and eased progress.
//! - [`FrameRequests`] / [`FrameToken`]: explicit cancellation tokens for
//!   outstanding per-frame callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use flipbook_timing::{FrameRequests, Tween};
//!
//! let mut frames = FrameRequests::new();
//! let tween = Tween::new(1_000, 400);
//! let token = frames.request();
//!
//! assert_eq!(tween.linear_at(1_200), 0.5);
//! assert!(!tween.is_finished(1_200));
//! assert!(tween.is_finished(1_400));
//!
//! // Tearing down cancels whatever is still pending.
//! frames.cancel_all();
//! assert!(!frames.is_pending(token));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod ease;
mod frames;
mod tween;

pub use ease::ease_in_out_cubic;
pub use frames::{FrameRequests, FrameToken};
pub use tween::{Millis, Tween};
