// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Cubic ease-in-out over `t ∈ [0, 1]`.
///
/// Input outside the unit interval is clamped first, so the result is always
/// in `[0, 1]` and the curve is monotonically non-decreasing.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
