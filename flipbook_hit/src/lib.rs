// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flipbook Hit: decide when a page edge is live for navigation.
//!
//! Each page of a spread has one *outer* edge: the left edge of a left-hand
//! page, the right edge of a right-hand page. Two independent predicates are
//! evaluated against it:
//!
//! - **Pointer feedback** ([`EdgeHit::pointer`]): the point is on the page,
//!   in the outer third of its width, and either in the top or bottom band or
//!   in the outer edge band. Hosts use this only to show a hand cursor.
//! - **Click to navigate** ([`EdgeHit::click`]): the point is level with the
//!   page and either in the outer edge band or within a fixed buffer just
//!   outside the outer edge, so clicks in the gap between pages still turn.
//!
//! The click zone is deliberately looser than the pointer zone. Keep them
//! separate: merging them changes which clicks navigate.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use flipbook_hit::{EdgeZoneParams, OuterEdge, hit_test_edge};
//!
//! let page = Rect::new(100.0, 0.0, 400.0, 400.0);
//! let params = EdgeZoneParams::default();
//!
//! // Just inside the left edge of a left page: both predicates fire.
//! let hit = hit_test_edge(page, Point::new(110.0, 200.0), OuterEdge::Left, &params);
//! assert!(hit.pointer && hit.click);
//!
//! // 60 units into the gap beyond the outer edge: clickable, no cursor.
//! let hit = hit_test_edge(page, Point::new(40.0, 200.0), OuterEdge::Left, &params);
//! assert!(hit.click && !hit.pointer);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect};

/// Which edge of the page faces away from the spine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OuterEdge {
    /// The page sits on the left of the spread.
    Left,
    /// The page sits on the right of the spread.
    Right,
}

/// Zone proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeZoneParams {
    /// Fraction of the width counted as the outer part for pointer feedback.
    pub outer_fraction: f64,
    /// Fraction of the height at the top and at the bottom for pointer feedback.
    pub band_fraction: f64,
    /// Fraction of the width forming the outer edge band.
    pub edge_fraction: f64,
    /// Distance past the outer edge that still counts as a click.
    pub gap_buffer: f64,
}

impl Default for EdgeZoneParams {
    fn default() -> Self {
        Self {
            outer_fraction: 1.0 / 3.0,
            band_fraction: 0.05,
            edge_fraction: 0.10,
            gap_buffer: 100.0,
        }
    }
}

/// Result of [`hit_test_edge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeHit {
    /// Show navigation feedback (a hand cursor).
    pub pointer: bool,
    /// A click here navigates.
    pub click: bool,
}

/// Tests `pt` against the outer-edge zones of `page`.
///
/// `page` and `pt` must be in the same coordinate space.
#[must_use]
pub fn hit_test_edge(page: Rect, pt: Point, edge: OuterEdge, params: &EdgeZoneParams) -> EdgeHit {
    let width = page.width();
    let height = page.height();
    let x = pt.x - page.x0;
    let y = pt.y - page.y0;

    let level = (0.0..=height).contains(&y);
    let on_page = level && (0.0..=width).contains(&x);

    let third = width * params.outer_fraction;
    let band = height * params.band_fraction;
    let edge_band = width * params.edge_fraction;

    let in_outer_third = match edge {
        OuterEdge::Left => x < third,
        OuterEdge::Right => x > width - third,
    };
    let in_top_bottom = y < band || y > height - band;
    let in_outer_edge = match edge {
        OuterEdge::Left => (0.0..edge_band).contains(&x),
        OuterEdge::Right => x > width - edge_band && x <= width,
    };
    let in_buffer = match edge {
        OuterEdge::Left => pt.x >= page.x0 - params.gap_buffer && pt.x < page.x0,
        OuterEdge::Right => pt.x > page.x1 && pt.x <= page.x1 + params.gap_buffer,
    };

    EdgeHit {
        pointer: on_page && in_outer_third && (in_top_bottom || in_outer_edge),
        click: level && (in_outer_edge || in_buffer),
    }
}

/// The single click target a host should attach to one side of a spread.
///
/// Covers the outer edge band plus the gap buffer, at the page's height.
/// Attaching exactly one region per side guarantees a click triggers at most
/// one navigation.
#[must_use]
pub fn click_region(page: Rect, edge: OuterEdge, params: &EdgeZoneParams) -> Rect {
    let edge_band = page.width() * params.edge_fraction;
    match edge {
        OuterEdge::Left => Rect::new(
            page.x0 - params.gap_buffer,
            page.y0,
            page.x0 + edge_band,
            page.y1,
        ),
        OuterEdge::Right => Rect::new(
            page.x1 - edge_band,
            page.y0,
            page.x1 + params.gap_buffer,
            page.y1,
        ),
    }
}
