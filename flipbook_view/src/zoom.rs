// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_timing::{Millis, Tween};

/// Zoom range and button increment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest zoom factor.
    pub min: f64,
    /// Largest zoom factor.
    pub max: f64,
    /// Increment applied by zoom-in / zoom-out buttons.
    pub step: f64,
}

impl ZoomLimits {
    /// Creates limits, swapping `min` and `max` if given out of order.
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            step: step.abs(),
        }
    }

    /// Clamps `zoom` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 2.0,
            step: 0.1,
        }
    }
}

/// An in-flight eased zoom change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnimation {
    from: f64,
    to: f64,
    tween: Tween,
}

impl ZoomAnimation {
    /// Animates from `from` to `to` starting at `start`.
    #[must_use]
    pub fn new(from: f64, to: f64, start: Millis, duration: Millis) -> Self {
        Self {
            from,
            to,
            tween: Tween::new(start, duration),
        }
    }

    /// Target zoom.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Zoom value at `now`.
    ///
    /// Returns exactly the target once the animation has finished.
    #[must_use]
    pub fn value_at(&self, now: Millis) -> f64 {
        if self.tween.is_finished(now) {
            return self.to;
        }
        let eased = self.tween.eased_at(now);
        self.from + (self.to - self.from) * eased
    }

    /// Returns `true` once `now` is past the end of the animation.
    #[must_use]
    pub fn is_finished(&self, now: Millis) -> bool {
        self.tween.is_finished(now)
    }
}
