// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf pose as a pure function of progress.

use core::f64::consts::PI;

use flipbook_pagination::Direction;
use flipbook_timing::ease_in_out_cubic;
use kurbo::{Affine, Point, Rect, Vec2};

/// Distance the leaf is lifted toward the viewer during a turn.
pub const LEAF_DEPTH: f64 = 60.0;

/// Progress at which the settle shrink begins.
const SHRINK_START: f64 = 0.85;
/// Scale at the very end of the turn.
const SHRINK_END_SCALE: f64 = 0.985;
/// Peak in-plane wobble, in degrees.
const LIFT_DEGREES: f64 = 1.5;
/// Peak opacity of the shadow cast on the destination spread.
const SHADOW_ALPHA: f64 = 0.15;
/// Opacity of the hinge-side shading at the end of the turn.
const SHADE_ALPHA: f64 = 0.25;

/// What the turning leaf shows.
///
/// The leaf has one opaque face. Before the halfway point it shows the page
/// being turned away from; from the halfway point on it shows the page being
/// revealed, mirrored so it reads correctly on the back of the leaf. The swap
/// is instantaneous.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafFace<T> {
    /// `progress < 0.5`: the outgoing page.
    FirstHalf(T),
    /// `progress >= 0.5`: the incoming page, mirrored.
    SecondHalf(T),
}

impl<T> LeafFace<T> {
    /// Chooses the face for `progress`.
    #[must_use]
    pub fn at(progress: f64, from: T, to: T) -> Self {
        if progress < 0.5 {
            Self::FirstHalf(from)
        } else {
            Self::SecondHalf(to)
        }
    }

    /// The page shown, whichever half.
    pub fn into_inner(self) -> T {
        match self {
            Self::FirstHalf(t) | Self::SecondHalf(t) => t,
        }
    }

    /// Returns `true` if the content must be drawn mirrored.
    #[must_use]
    pub fn is_mirrored(&self) -> bool {
        matches!(self, Self::SecondHalf(_))
    }

    /// Maps the page value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LeafFace<U> {
        match self {
            Self::FirstHalf(t) => LeafFace::FirstHalf(f(t)),
            Self::SecondHalf(t) => LeafFace::SecondHalf(f(t)),
        }
    }
}

/// Which way a gradient runs across the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    /// Transparent on the right, dark on the left.
    ToLeft,
    /// Transparent on the left, dark on the right.
    ToRight,
}

/// Full visual state of the turning leaf at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnPose {
    /// Rotation about the vertical hinge axis, in degrees. Runs 0 to -180 for
    /// a next turn and 0 to 180 for a previous turn.
    pub angle: f64,
    /// Small in-plane rotation, in degrees, that peaks mid-turn.
    pub lift: f64,
    /// Horizontal travel closing the gap between the pages.
    pub translate_x: f64,
    /// Constant depth toward the viewer; see [`LEAF_DEPTH`].
    pub depth: f64,
    /// Uniform scale; dips slightly at the very end.
    pub scale: f64,
    /// Opacity of the shadow cast on the destination spread.
    pub shadow_alpha: f64,
    /// Direction the cast shadow darkens toward.
    pub shadow_direction: GradientDirection,
    /// Opacity of the shading on the hinge side of the leaf.
    pub shade_alpha: f64,
    /// `true` from the halfway point on.
    pub mirrored: bool,
}

impl TurnPose {
    /// Pose at `progress` (clamped into `[0, 1]`) of a turn in `direction`
    /// across a gap of `gap` units.
    #[must_use]
    pub fn at(progress: f64, direction: Direction, gap: f64) -> Self {
        let p = progress.clamp(0.0, 1.0);
        let sign = match direction {
            Direction::Next => -1.0,
            Direction::Prev => 1.0,
        };

        let first_half = p < 0.5;
        let half = if first_half { p / 0.5 } else { (p - 0.5) / 0.5 };
        let magnitude = if first_half { 90.0 * half } else { 90.0 + 90.0 * half };

        let end = ((p - SHRINK_START) / (1.0 - SHRINK_START)).clamp(0.0, 1.0);
        let swing = (PI * p).sin();

        Self {
            angle: sign * magnitude,
            lift: -sign * LIFT_DEGREES * swing,
            translate_x: sign * gap * ease_in_out_cubic(p),
            depth: LEAF_DEPTH,
            scale: 1.0 - (1.0 - SHRINK_END_SCALE) * ease_in_out_cubic(end),
            shadow_alpha: SHADOW_ALPHA * swing,
            shadow_direction: match direction {
                Direction::Next => GradientDirection::ToLeft,
                Direction::Prev => GradientDirection::ToRight,
            },
            shade_alpha: SHADE_ALPHA * p,
            mirrored: !first_half,
        }
    }

    /// Orthographic projection of the leaf onto the stage.
    ///
    /// For renderers without 3D transforms: the hinge rotation becomes a
    /// horizontal scale by `cos(angle)` about `hinge`, which folds the leaf
    /// over the spine in the second half. Depth is dropped.
    #[must_use]
    pub fn flat_transform(&self, hinge: Point) -> Affine {
        let to_hinge = Affine::translate(hinge.to_vec2());
        let from_hinge = Affine::translate(-hinge.to_vec2());
        Affine::translate(Vec2::new(self.translate_x, 0.0))
            * to_hinge
            * Affine::scale_non_uniform(self.angle.to_radians().cos(), 1.0)
            * Affine::rotate(self.lift.to_radians())
            * Affine::scale(self.scale)
            * from_hinge
    }

    /// Transform applied to the leaf's content inside `leaf`.
    ///
    /// Identity in the first half, a horizontal mirror about the leaf center
    /// in the second.
    #[must_use]
    pub fn content_transform(&self, leaf: Rect) -> Affine {
        if !self.mirrored {
            return Affine::IDENTITY;
        }
        let center = leaf.center().to_vec2();
        Affine::translate(center) * Affine::scale_non_uniform(-1.0, 1.0) * Affine::translate(-center)
    }
}
