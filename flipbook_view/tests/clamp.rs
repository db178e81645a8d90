// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for pan clamping in `flipbook_view`.
//!
//! Any sequence of zoom, pan and drag operations must leave the pan offset
//! inside the clamp region for the current zoom and content size.

use flipbook_view::{SpreadViewport, ZoomLimits, ZoomTick, clamp_pan, pan_range};
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Zoom(f64),
    Animate(f64),
    PanBy(f64, f64),
    Drag(f64, f64),
    Resize(f64, f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0.25_f64..3.0).prop_map(Op::Zoom),
        (0.25_f64..3.0).prop_map(Op::Animate),
        (-2000.0_f64..2000.0, -2000.0_f64..2000.0).prop_map(|(x, y)| Op::PanBy(x, y)),
        (-2000.0_f64..2000.0, -2000.0_f64..2000.0).prop_map(|(x, y)| Op::Drag(x, y)),
        (100.0_f64..3000.0, 100.0_f64..3000.0).prop_map(|(w, h)| Op::Resize(w, h)),
    ]
}

fn within_bounds(view: &SpreadViewport) -> bool {
    let check = |pan: f64, viewport: f64, content: f64| match pan_range(viewport, content, view.zoom()) {
        Some((min, max)) => pan >= min - 1e-9 && pan <= max + 1e-9,
        None => pan == 0.0,
    };
    let vp = view.viewport_size();
    let content = view.content_size();
    check(view.pan().x, vp.width, content.width) && check(view.pan().y, vp.height, content.height)
}

proptest! {
    #[test]
    fn clamp_is_idempotent(
        x in -5000.0_f64..5000.0,
        y in -5000.0_f64..5000.0,
        vw in 1.0_f64..4000.0,
        vh in 1.0_f64..4000.0,
        cw in 1.0_f64..4000.0,
        ch in 1.0_f64..4000.0,
        zoom in 0.1_f64..4.0,
    ) {
        let viewport = Size::new(vw, vh);
        let content = Size::new(cw, ch);
        let once = clamp_pan(Vec2::new(x, y), viewport, content, zoom);
        let twice = clamp_pan(once, viewport, content, zoom);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pan_stays_in_bounds(ops in proptest::collection::vec(op(), 1..40)) {
        let mut view = SpreadViewport::new(ZoomLimits::new(0.5, 2.0, 0.1), 100);
        view.set_viewport_size(Size::new(1200.0, 800.0));
        view.set_content_size(Size::new(1100.0, 760.0));
        let mut now = 0;
        for op in ops {
            match op {
                Op::Zoom(z) => view.set_zoom(z),
                Op::Animate(z) => {
                    view.animate_zoom_to(z, now);
                    now += 50;
                    let _ = view.tick(now);
                }
                Op::PanBy(x, y) => {
                    let _ = view.pan_by(Vec2::new(x, y));
                }
                Op::Drag(x, y) => {
                    if view.pointer_down(Point::new(0.0, 0.0)) {
                        view.pointer_move(Point::new(x, y));
                        view.pointer_up();
                    }
                }
                Op::Resize(w, h) => view.set_viewport_size(Size::new(w, h)),
            }
            prop_assert!(within_bounds(&view), "pan {:?} out of bounds at zoom {}", view.pan(), view.zoom());
        }
        now += 1000;
        prop_assert_ne!(view.tick(now), ZoomTick::Running);
        prop_assert!(within_bounds(&view));
    }
}
