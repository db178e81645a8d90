// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of pages within a spread.

use flipbook_pagination::{Page, PageKind, PageSide};

use crate::payload::PageView;

/// Page width over page height.
pub const PAGE_ASPECT_RATIO: f64 = 228.0 / 297.0;

/// The half of the spread a page is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Left of the spine.
    Left,
    /// Right of the spine.
    Right,
}

/// Where `page` is drawn.
///
/// A cover always sits on the right of the spine, and the closing page on
/// the left, whatever its recorded side.
#[must_use]
pub fn effective_side(page: &Page) -> Slot {
    match (page.kind, page.side) {
        (PageKind::Cover, _) | (_, PageSide::Cover) => Slot::Right,
        (PageKind::BackCover, _) | (_, PageSide::End | PageSide::Left) => Slot::Left,
        (_, PageSide::Right) => Slot::Right,
    }
}

/// The pages of one spread, by slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpreadSides<'a> {
    /// Page drawn left of the spine.
    pub left: Option<&'a PageView>,
    /// Page drawn right of the spine.
    pub right: Option<&'a PageView>,
}

impl<'a> SpreadSides<'a> {
    /// Assigns each page to its [`effective_side`]. A later page replaces an
    /// earlier one in the same slot.
    #[must_use]
    pub fn split(view_data: &'a [PageView]) -> Self {
        let mut sides = Self::default();
        for view in view_data {
            match effective_side(&view.page) {
                Slot::Left => sides.left = Some(view),
                Slot::Right => sides.right = Some(view),
            }
        }
        sides
    }

    /// The page in `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&'a PageView> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use flipbook_pagination::{Page, PageKind, PageSide};

    use super::{Slot, SpreadSides, effective_side};
    use crate::payload::PageView;

    fn view(number: u32, kind: PageKind, side: PageSide) -> PageView {
        PageView {
            page: Page::new(format!("p{number}"), number, kind, side),
            company: None,
            paragraphs: Vec::new(),
        }
    }

    #[test]
    fn covers_and_ends_are_forced() {
        let cover = Page::new("c", 0, PageKind::Cover, PageSide::Left);
        assert_eq!(effective_side(&cover), Slot::Right);
        let back = Page::new("b", 15, PageKind::BackCover, PageSide::Right);
        assert_eq!(effective_side(&back), Slot::Left);
        let end = Page::new("e", 15, PageKind::Article, PageSide::End);
        assert_eq!(effective_side(&end), Slot::Left);
        let right = Page::new("r", 2, PageKind::Article, PageSide::Right);
        assert_eq!(effective_side(&right), Slot::Right);
    }

    #[test]
    fn split_fills_both_slots() {
        let pages = [
            view(3, PageKind::Article, PageSide::Left),
            view(4, PageKind::Advert, PageSide::Right),
        ];
        let sides = SpreadSides::split(&pages);
        assert_eq!(sides.get(Slot::Left).map(|v| v.page.number), Some(3));
        assert_eq!(sides.get(Slot::Right).map(|v| v.page.number), Some(4));

        let cover = [view(0, PageKind::Cover, PageSide::Cover)];
        let sides = SpreadSides::split(&cover);
        assert!(sides.left.is_none());
        assert_eq!(sides.right.map(|v| v.page.number), Some(0));
    }
}
