// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook View: zoom and pan over a rendered spread.
//!
//! This crate is a small, headless model of the flipbook viewport. It owns
//! the zoom factor and pan offset and keeps them valid with respect to the
//! measured viewport and content sizes. It focuses on:
//! - Pan clamping ([`clamp_pan`]) that keeps scaled content covering the
//!   viewport, or centered when it is smaller.
//! - Eased zoom animation advanced by the host's frame loop.
//! - Drag-to-pan capture ([`PanDrag`]).
//! - Cursor selection for the current interaction state.
//!
//! It does **not** render, measure, or receive events. Callers are expected
//! to:
//! - Measure the viewport and spread content and report the sizes.
//! - Call [`SpreadViewport::tick`] with a monotonic timestamp each frame while
//!   [`SpreadViewport::is_animating`] is `true`.
//! - Apply [`SpreadViewport::transform`] to the spread content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use flipbook_view::{SpreadViewport, ZoomTick};
//!
//! let mut view = SpreadViewport::default();
//! view.set_viewport_size(Size::new(1280.0, 800.0));
//! view.set_content_size(Size::new(1200.0, 780.0));
//!
//! // Double click: animate to 1.5x over 1.2s.
//! view.toggle_zoom(0);
//! assert_eq!(view.tick(600), ZoomTick::Running);
//! assert_eq!(view.tick(1200), ZoomTick::Finished);
//! assert_eq!(view.zoom(), 1.5);
//!
//! // Drag the magnified content; pan stays inside the clamp region.
//! view.pointer_down(Point::new(600.0, 400.0));
//! view.pointer_move(Point::new(-5000.0, 400.0));
//! view.pointer_up();
//! assert!(view.pan().x >= 640.0 - 1800.0 + 600.0);
//! ```

mod clamp;
mod drag;
mod viewport;
mod zoom;

pub use clamp::{clamp_pan, pan_range};
pub use drag::PanDrag;
pub use viewport::{
    Cursor, DEFAULT_TOGGLE_ZOOM, DEFAULT_ZOOM_DURATION_MS, SpreadViewport, ViewportState, ZoomTick,
};
pub use zoom::{ZoomAnimation, ZoomLimits};
