// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Clamps a pan offset so scaled content never exposes area past its edges.
///
/// Content of size `content` is laid out centered in a viewport of size
/// `viewport`, then scaled by `zoom` about its top-left corner and shifted by
/// `pan`. Along each axis the allowed range is
///
/// ```text
/// min = viewport/2 - content*zoom + content/2
/// max = content/2 - viewport/2
/// ```
///
/// When the scaled content is smaller than the viewport on an axis
/// (`min > max`), the range collapses to `0` on that axis so the content
/// stays centered instead of floating freely.
///
/// The result is idempotent: clamping an already clamped offset returns it
/// unchanged.
#[must_use]
pub fn clamp_pan(pan: Vec2, viewport: Size, content: Size, zoom: f64) -> Vec2 {
    Vec2::new(
        clamp_axis(pan.x, viewport.width, content.width, zoom),
        clamp_axis(pan.y, viewport.height, content.height, zoom),
    )
}

/// The `(min, max)` pan range along one axis, or `None` when it collapses.
#[must_use]
pub fn pan_range(viewport: f64, content: f64, zoom: f64) -> Option<(f64, f64)> {
    let scaled = content * zoom;
    let min = viewport / 2.0 - scaled + content / 2.0;
    let max = content / 2.0 - viewport / 2.0;
    (min <= max).then_some((min, max))
}

fn clamp_axis(value: f64, viewport: f64, content: f64, zoom: f64) -> f64 {
    match pan_range(viewport, content, zoom) {
        Some((min, max)) => value.clamp(min, max),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{clamp_pan, pan_range};

    #[test]
    fn small_content_is_centered() {
        let viewport = Size::new(1000.0, 800.0);
        let content = Size::new(600.0, 400.0);
        let pan = clamp_pan(Vec2::new(250.0, -90.0), viewport, content, 1.0);
        assert_eq!(pan, Vec2::ZERO);
    }

    #[test]
    fn zoomed_content_can_be_panned_within_range() {
        let viewport = Size::new(1000.0, 800.0);
        let content = Size::new(1000.0, 800.0);
        // At 2x the scaled content is 2000 wide: min = 500 - 2000 + 500 = -1000, max = 0.
        assert_eq!(pan_range(1000.0, 1000.0, 2.0), Some((-1000.0, 0.0)));
        let pan = clamp_pan(Vec2::new(-400.0, 50.0), viewport, content, 2.0);
        assert_eq!(pan, Vec2::new(-400.0, 0.0));
        let pan = clamp_pan(Vec2::new(-5000.0, -5000.0), viewport, content, 2.0);
        assert_eq!(pan, Vec2::new(-1000.0, -800.0));
    }

    #[test]
    fn exact_fit_collapses_to_a_point() {
        assert_eq!(pan_range(500.0, 500.0, 1.0), Some((0.0, 0.0)));
    }
}
