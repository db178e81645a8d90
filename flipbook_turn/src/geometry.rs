// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::Direction;
use kurbo::{Point, Rect, Size};

/// Layout measured once when a turn starts.
///
/// The snapshot is frozen for the whole turn so that the leaf does not jump
/// if the host relayouts mid-animation. All rectangles are in stage
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnGeometry {
    /// Size of the area the turn is drawn in.
    pub stage: Size,
    /// Rectangle of the page that turns: the right page when turning to the
    /// next spread, the left page when turning back.
    pub leaf: Rect,
    /// Horizontal distance between the two pages, never negative.
    pub gap: f64,
}

impl TurnGeometry {
    /// Measures a turn in `direction` from the current page rectangles.
    ///
    /// A spread that shows a single page has only one rectangle. If the page
    /// that should turn is missing, the other one is used so the leaf still
    /// has a size, and the gap is zero.
    #[must_use]
    pub fn measure(stage: Size, left: Option<Rect>, right: Option<Rect>, direction: Direction) -> Self {
        let (turning, other) = match direction {
            Direction::Next => (right, left),
            Direction::Prev => (left, right),
        };
        let leaf = turning.or(other).unwrap_or(Rect::ZERO);
        let gap = match (left, right) {
            (Some(l), Some(r)) => (r.x0 - l.x1).max(0.0),
            _ => 0.0,
        };
        Self { stage, leaf, gap }
    }

    /// Size of the turning page.
    #[must_use]
    pub fn leaf_size(&self) -> Size {
        self.leaf.size()
    }

    /// The edge the leaf rotates about, at mid height.
    ///
    /// The spine side of the turning page: its left edge when turning to the
    /// next spread, its right edge when turning back.
    #[must_use]
    pub fn hinge(&self, direction: Direction) -> Point {
        let y = self.leaf.center().y;
        match direction {
            Direction::Next => Point::new(self.leaf.x0, y),
            Direction::Prev => Point::new(self.leaf.x1, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use flipbook_pagination::Direction;
    use kurbo::{Point, Rect, Size};

    use super::TurnGeometry;

    const STAGE: Size = Size::new(1200.0, 800.0);
    const LEFT: Rect = Rect::new(100.0, 50.0, 500.0, 571.0);
    const RIGHT: Rect = Rect::new(516.0, 50.0, 916.0, 571.0);

    #[test]
    fn next_turns_the_right_page() {
        let g = TurnGeometry::measure(STAGE, Some(LEFT), Some(RIGHT), Direction::Next);
        assert_eq!(g.leaf, RIGHT);
        assert_eq!(g.gap, 16.0);
        assert_eq!(g.hinge(Direction::Next), Point::new(516.0, 310.5));
    }

    #[test]
    fn prev_turns_the_left_page() {
        let g = TurnGeometry::measure(STAGE, Some(LEFT), Some(RIGHT), Direction::Prev);
        assert_eq!(g.leaf, LEFT);
        assert_eq!(g.hinge(Direction::Prev), Point::new(500.0, 310.5));
    }

    #[test]
    fn overlap_and_single_pages() {
        let overlapping = Rect::new(480.0, 50.0, 880.0, 571.0);
        let g = TurnGeometry::measure(STAGE, Some(LEFT), Some(overlapping), Direction::Next);
        assert_eq!(g.gap, 0.0);

        // Cover spread: only a right page exists; turning back borrows it.
        let g = TurnGeometry::measure(STAGE, None, Some(RIGHT), Direction::Prev);
        assert_eq!(g.leaf, RIGHT);
        assert_eq!(g.gap, 0.0);

        let g = TurnGeometry::measure(STAGE, None, None, Direction::Next);
        assert_eq!(g.leaf_size(), Size::ZERO);
    }
}
