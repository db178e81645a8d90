// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_timing::Millis;
use kurbo::{Affine, Point, Size, Vec2};

use crate::clamp::clamp_pan;
use crate::drag::PanDrag;
use crate::zoom::{ZoomAnimation, ZoomLimits};

/// Zoom duration used by [`SpreadViewport::default`].
pub const DEFAULT_ZOOM_DURATION_MS: Millis = 1200;

/// Zoom reached by [`SpreadViewport::toggle_zoom`] from 1×.
pub const DEFAULT_TOGGLE_ZOOM: f64 = 1.5;

/// Cursor the host should show over the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Plain arrow.
    #[default]
    Default,
    /// A page edge is live for navigation.
    Pointer,
    /// Zoomed in; the content can be dragged.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Result of advancing the zoom animation by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomTick {
    /// Nothing was animating.
    Idle,
    /// The animation is still running; request another frame.
    Running,
    /// The animation reached its target on this frame.
    Finished,
}

/// Zoom and pan snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform zoom factor.
    pub zoom: f64,
    /// Pan offset in viewport pixels.
    pub pan: Vec2,
}

/// Zoom and pan over one rendered spread.
///
/// `SpreadViewport` owns the zoom factor and pan offset and is the only thing
/// that mutates them. Pan is re-clamped with [`clamp_pan`] whenever zoom,
/// viewport size or content size changes, so the pair is always valid.
///
/// Zoom changes are animated: [`SpreadViewport::animate_zoom_to`] stores an
/// eased [`ZoomAnimation`] and the host advances it with
/// [`SpreadViewport::tick`] on every frame. A new animation replaces the
/// previous one.
#[derive(Clone, Debug)]
pub struct SpreadViewport {
    viewport: Size,
    content: Size,
    zoom: f64,
    pan: Vec2,
    limits: ZoomLimits,
    duration: Millis,
    toggle_zoom: f64,
    animation: Option<ZoomAnimation>,
    drag: PanDrag,
    suspended: bool,
    edge_hover: bool,
}

impl Default for SpreadViewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), DEFAULT_ZOOM_DURATION_MS)
    }
}

impl SpreadViewport {
    /// Creates a viewport at 1× with zero pan.
    #[must_use]
    pub fn new(limits: ZoomLimits, duration: Millis) -> Self {
        Self {
            viewport: Size::ZERO,
            content: Size::ZERO,
            zoom: limits.clamp(1.0),
            pan: Vec2::ZERO,
            limits,
            duration,
            toggle_zoom: DEFAULT_TOGGLE_ZOOM,
            animation: None,
            drag: PanDrag::default(),
            suspended: false,
            edge_hover: false,
        }
    }

    /// Sets the zoom reached by [`SpreadViewport::toggle_zoom`].
    #[must_use]
    pub fn with_toggle_zoom(mut self, zoom: f64) -> Self {
        self.toggle_zoom = self.limits.clamp(zoom);
        self
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Zoom and pan together.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            zoom: self.zoom,
            pan: self.pan,
        }
    }

    /// Configured zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Measured viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Measured (unscaled) content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Updates the measured viewport size and re-clamps pan.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport != size {
            self.viewport = size;
            self.reclamp();
        }
    }

    /// Updates the measured content size and re-clamps pan.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content != size {
            self.content = size;
            self.reclamp();
        }
    }

    /// Sets zoom immediately, cancelling any animation.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.animation = None;
        self.apply_zoom(self.limits.clamp(zoom));
    }

    /// Starts an eased animation from the current zoom to `target`.
    ///
    /// The target is clamped into the zoom limits. Any animation already in
    /// flight is superseded. When the animation finishes at a target of 1× or
    /// less, pan resets to the origin (or the nearest clamped offset).
    pub fn animate_zoom_to(&mut self, target: f64, now: Millis) {
        let target = self.limits.clamp(target);
        self.animation = Some(ZoomAnimation::new(self.zoom, target, now, self.duration));
    }

    /// Stops the current animation where it is.
    pub fn cancel_animation(&mut self) -> Option<ZoomAnimation> {
        self.animation.take()
    }

    /// Returns `true` while a zoom animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the zoom animation to `now`.
    pub fn tick(&mut self, now: Millis) -> ZoomTick {
        let Some(animation) = self.animation else {
            return ZoomTick::Idle;
        };
        self.apply_zoom(animation.value_at(now));
        if !animation.is_finished(now) {
            return ZoomTick::Running;
        }
        self.animation = None;
        if animation.target() <= 1.0 {
            self.pan = clamp_pan(Vec2::ZERO, self.viewport, self.content, self.zoom);
        }
        ZoomTick::Finished
    }

    /// Double-click behavior: 1× zooms to the toggle level, anything else
    /// returns to 1×.
    pub fn toggle_zoom(&mut self, now: Millis) {
        let target = if self.is_at_unit_zoom() {
            self.toggle_zoom
        } else {
            1.0
        };
        self.animate_zoom_to(target, now);
    }

    /// Steps zoom up by the configured increment.
    ///
    /// Returns `false` when already at the maximum.
    pub fn zoom_in(&mut self, now: Millis) -> bool {
        let target = (self.zoom + self.limits.step).min(self.limits.max);
        if target <= self.zoom {
            return false;
        }
        self.animate_zoom_to(target, now);
        true
    }

    /// Steps zoom down by the configured increment.
    ///
    /// Returns `false` when already at the minimum.
    pub fn zoom_out(&mut self, now: Millis) -> bool {
        let target = (self.zoom - self.limits.step).max(self.limits.min);
        if target >= self.zoom {
            return false;
        }
        self.animate_zoom_to(target, now);
        true
    }

    /// Returns `true` if [`SpreadViewport::zoom_in`] would do anything.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.limits.max
    }

    /// Returns `true` if [`SpreadViewport::zoom_out`] would do anything.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.limits.min
    }

    /// Escape behavior: animate back to 1× and recenter.
    ///
    /// Returns `false` when already at rest at 1× with zero pan.
    pub fn reset(&mut self, now: Millis) -> bool {
        if self.animation.is_none() && self.is_at_unit_zoom() && self.pan == Vec2::ZERO {
            return false;
        }
        self.animate_zoom_to(1.0, now);
        true
    }

    /// Returns `true` when magnified beyond 1×.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.zoom > 1.0
    }

    /// Returns `true` when zoom is not above 1× and not animating.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.animation.is_none() && !self.is_zoomed_in()
    }

    /// Pans by `delta`, then re-clamps.
    ///
    /// Only permitted while zoomed in and not suspended.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if self.suspended || !self.is_zoomed_in() {
            return false;
        }
        self.pan = clamp_pan(self.pan + delta, self.viewport, self.content, self.zoom);
        true
    }

    /// Pointer pressed: captures a drag when zoomed in.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        if self.suspended || !self.is_zoomed_in() {
            return false;
        }
        self.drag.start(pointer, self.pan);
        true
    }

    /// Pointer moved: updates pan while a drag is captured.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(pan) = self.drag.pan_at(pointer) else {
            return false;
        };
        self.pan = clamp_pan(pan, self.viewport, self.content, self.zoom);
        true
    }

    /// Pointer released: ends the drag.
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer left the viewport: ends the drag and clears edge hover.
    pub fn pointer_leave(&mut self) {
        self.drag.end();
        self.edge_hover = false;
    }

    /// Returns `true` while a drag is captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Suspends or resumes drag and pan input.
    ///
    /// Suspending releases any active drag.
    pub fn set_interaction_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        if suspended {
            self.drag.end();
            self.edge_hover = false;
        }
    }

    /// Returns `true` while input is suspended.
    #[must_use]
    pub fn is_interaction_suspended(&self) -> bool {
        self.suspended
    }

    /// Records whether the pointer is over a live page edge.
    ///
    /// Ignored while zoomed in, where the cursor always reflects dragging.
    pub fn set_edge_hover(&mut self, hover: bool) {
        self.edge_hover = hover && !self.is_zoomed_in();
    }

    /// Cursor for the current interaction state.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.is_zoomed_in() {
            if self.drag.is_dragging() {
                Cursor::Grabbing
            } else {
                Cursor::Grab
            }
        } else if self.edge_hover {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// Zoom as a rounded percentage, for display.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Zoom is clamped to a small positive range"
        )]
        {
            (self.zoom * 100.0).round() as u32
        }
    }

    /// Content transform: translate by pan, then scale about the top-left.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    fn is_at_unit_zoom(&self) -> bool {
        (self.zoom - 1.0).abs() < 1e-9
    }

    fn apply_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        if !self.is_zoomed_in() {
            self.drag.end();
        }
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.pan = clamp_pan(self.pan, self.viewport, self.content, self.zoom);
    }
}
