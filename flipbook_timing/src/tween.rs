// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ease::ease_in_out_cubic;

/// Monotonic timestamp or duration in milliseconds.
pub type Millis = u64;

/// A fixed-duration time window.
///
/// A `Tween` stores only its start time and duration. Progress is recomputed
/// from the timestamp passed in, so a tween can be queried at any instant
/// without accumulating drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tween {
    start: Millis,
    duration: Millis,
}

impl Tween {
    /// Creates a tween starting at `start` and lasting `duration` ms.
    #[must_use]
    pub fn new(start: Millis, duration: Millis) -> Self {
        Self { start, duration }
    }

    /// Start timestamp.
    #[must_use]
    pub fn start(&self) -> Millis {
        self.start
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> Millis {
        self.duration
    }

    /// Linear progress at `now`, clamped to `[0, 1]`.
    ///
    /// Timestamps before the start map to `0`. A zero-length tween is
    /// complete immediately.
    #[must_use]
    pub fn linear_at(&self, now: Millis) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        if elapsed >= self.duration {
            return 1.0;
        }
        elapsed as f64 / self.duration as f64
    }

    /// Eased progress at `now` using [`ease_in_out_cubic`].
    #[must_use]
    pub fn eased_at(&self, now: Millis) -> f64 {
        ease_in_out_cubic(self.linear_at(now))
    }

    /// Returns `true` once `now` has reached the end of the window.
    #[must_use]
    pub fn is_finished(&self, now: Millis) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }
}
