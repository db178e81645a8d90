// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag capture.
//!
//! ## Usage
//!
//! 1) Capture with [`PanDrag::start`], passing the pointer position and the
//!    pan offset at that moment.
//! 2) On each move, [`PanDrag::pan_at`] returns the unclamped pan for the new
//!    pointer position (start pan plus total pointer offset).
//! 3) Release with [`PanDrag::end`] on pointer-up or pointer-leave.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use flipbook_view::PanDrag;
//!
//! let mut drag = PanDrag::default();
//! drag.start(Point::new(10.0, 20.0), Vec2::new(-100.0, 0.0));
//! assert!(drag.is_dragging());
//!
//! let pan = drag.pan_at(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(pan, Vec2::new(-95.0, 5.0));
//!
//! drag.end();
//! assert!(drag.pan_at(Point::new(0.0, 0.0)).is_none());
//! ```

use kurbo::{Point, Vec2};

/// Two-state drag gesture: idle or captured.
#[derive(Debug, Clone, Default, Copy)]
pub struct PanDrag {
    /// Pointer position and pan offset captured at pointer-down.
    pub origin: Option<(Point, Vec2)>,
}

impl PanDrag {
    /// Capture the pointer at `pointer` with the current `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vec2) {
        self.origin = Some((pointer, pan));
    }

    /// Pan offset implied by moving the captured pointer to `pointer`.
    ///
    /// Computed from the total offset since capture, not from incremental
    /// deltas, so dropped move events cannot accumulate error.
    #[must_use]
    pub fn pan_at(&self, pointer: Point) -> Option<Vec2> {
        self.origin
            .map(|(start_pointer, start_pan)| start_pan + (pointer - start_pointer))
    }

    /// Release the capture.
    pub fn end(&mut self) {
        self.origin = None;
    }

    /// Returns `true` while captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
