// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_hit::OuterEdge;
use flipbook_pagination::Direction;
use flipbook_spread::Slot;
use kurbo::{Rect, Size};

/// Measured layout of the current spread, reported by the host.
///
/// Page rectangles are in the same space as pointer positions (viewport
/// coordinates, after the zoom and pan transform). Content size is the
/// unscaled size of the spread.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpreadLayout {
    /// Size of the visible viewport.
    pub viewport: Size,
    /// Unscaled size of the spread content.
    pub content: Size,
    /// Rectangle of the page left of the spine, if any.
    pub left: Option<Rect>,
    /// Rectangle of the page right of the spine, if any.
    pub right: Option<Rect>,
}

impl SpreadLayout {
    /// The page rectangle in `slot`.
    #[must_use]
    pub fn page(&self, slot: Slot) -> Option<Rect> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }
}

/// The edge facing away from the spine for a page in `slot`.
pub(crate) fn outer_edge(slot: Slot) -> OuterEdge {
    match slot {
        Slot::Left => OuterEdge::Left,
        Slot::Right => OuterEdge::Right,
    }
}

/// Clicking the outer edge of a page in `slot` turns this way.
pub(crate) fn turn_direction(slot: Slot) -> Direction {
    match slot {
        Slot::Left => Direction::Prev,
        Slot::Right => Direction::Next,
    }
}

/// Slot of the turning page for a turn in `direction`.
pub(crate) fn turning_slot(direction: Direction) -> Slot {
    match direction {
        Direction::Prev => Slot::Left,
        Direction::Next => Slot::Right,
    }
}

/// Slot of the destination page revealed on the leaf's back.
pub(crate) fn revealed_slot(direction: Direction) -> Slot {
    match direction {
        Direction::Prev => Slot::Right,
        Direction::Next => Slot::Left,
    }
}
