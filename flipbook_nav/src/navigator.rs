// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use flipbook_hit::{EdgeZoneParams, hit_test_edge};
use flipbook_pagination::{Direction, SpreadLabel};
use flipbook_spread::{PageView, Slot, SpreadCache, SpreadPayload, spread_location};
use flipbook_timing::{FrameRequests, FrameToken, Millis};
use flipbook_turn::{LeafFace, TurnGeometry, TurnMachine, TurnPhase, TurnScene, TurnTick};
use flipbook_view::{Cursor, SpreadViewport, ZoomTick};
use kurbo::Point;
use tracing::{debug, info, warn};

use crate::command::{Command, FetchError, Key, NavButton};
use crate::config::NavigatorConfig;
use crate::layout::{SpreadLayout, outer_edge, revealed_slot, turn_direction, turning_slot};

/// The flipbook navigation controller.
///
/// `Navigator` owns every piece of mutable navigation state: the current
/// spread, the zoom/pan viewport, the page-turn machine, the spread cache,
/// the outstanding frame tokens and the last measured layout. Input methods
/// return the [`Command`]s the host has to carry out; nothing here performs
/// I/O or reads a clock.
///
/// The host loop is:
/// - report layout with [`set_layout`](Self::set_layout) after each render;
/// - forward keys, buttons and pointer events;
/// - run [`Command::Fetch`] and report with
///   [`fetch_resolved`](Self::fetch_resolved);
/// - on [`Command::Push`], route to the location, then call
///   [`show`](Self::show) with the routed spread;
/// - on [`Command::RequestFrame`], call [`frame`](Self::frame) with the token
///   on the next animation frame.
#[derive(Debug)]
pub struct Navigator {
    config: NavigatorConfig,
    edge_zones: EdgeZoneParams,
    current: Arc<SpreadPayload>,
    viewport: SpreadViewport,
    turn: TurnMachine<Arc<SpreadPayload>>,
    cache: SpreadCache,
    frames: FrameRequests,
    zoom_frame: Option<FrameToken>,
    turn_frame: Option<FrameToken>,
    layout: SpreadLayout,
}

impl Navigator {
    /// Creates a navigator showing `initial`.
    #[must_use]
    pub fn new(config: NavigatorConfig, initial: impl Into<Arc<SpreadPayload>>) -> Self {
        let mut cache = SpreadCache::new();
        let current = cache.insert(initial);
        let viewport = SpreadViewport::new(config.zoom_limits(), config.zoom_duration_ms)
            .with_toggle_zoom(config.double_click_zoom);
        Self {
            edge_zones: config.edge_zones(),
            config,
            current,
            viewport,
            turn: TurnMachine::new(config.turn_duration_ms),
            cache,
            frames: FrameRequests::new(),
            zoom_frame: None,
            turn_frame: None,
            layout: SpreadLayout::default(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The spread currently on screen.
    #[must_use]
    pub fn current(&self) -> &Arc<SpreadPayload> {
        &self.current
    }

    /// Zoom and pan state.
    #[must_use]
    pub fn viewport(&self) -> &SpreadViewport {
        &self.viewport
    }

    /// Spreads fetched so far.
    #[must_use]
    pub fn cache(&self) -> &SpreadCache {
        &self.cache
    }

    /// Last reported layout.
    #[must_use]
    pub fn layout(&self) -> &SpreadLayout {
        &self.layout
    }

    /// Records the measured layout and re-clamps pan against it.
    ///
    /// A turn in progress keeps the geometry it started with.
    pub fn set_layout(&mut self, layout: SpreadLayout) {
        self.viewport.set_viewport_size(layout.viewport);
        self.viewport.set_content_size(layout.content);
        self.layout = layout;
    }

    /// Starts a turn toward the neighboring spread.
    ///
    /// Ignored while a turn is in progress, while the view is zoomed in or
    /// still animating its zoom, and at either end of the document. With
    /// reduced motion the navigation happens at once, unanimated.
    pub fn request_navigate(&mut self, direction: Direction, now: Millis) -> Vec<Command> {
        let mut out = Vec::new();
        if self.turn.is_turning() {
            debug!(?direction, "navigation ignored: a turn is in progress");
            return out;
        }
        if !self.viewport.is_at_rest() {
            debug!(?direction, zoom = self.viewport.zoom(), "navigation ignored: zoomed in");
            return out;
        }
        let Some(target) = self.current.neighbor(direction).cloned() else {
            return out;
        };
        if self.config.reduced_motion {
            info!(%target, "navigating without animation");
            out.push(Command::Push(spread_location(&target)));
            return out;
        }

        let geometry = TurnGeometry::measure(
            self.layout.content,
            self.layout.left,
            self.layout.right,
            direction,
        );
        if let Err(err) = self
            .turn
            .begin(direction, target.clone(), Arc::clone(&self.current), geometry)
        {
            debug!(%err, "navigation ignored");
            return out;
        }
        self.viewport.set_interaction_suspended(true);
        info!(?direction, from = %self.current.label, to = %target, "turn started");

        match self.cache.get(&target) {
            Some(payload) => self.start_turn_clock(payload, now, &mut out),
            None => out.push(Command::Fetch(target)),
        }
        out
    }

    /// Reports the outcome of a [`Command::Fetch`].
    ///
    /// Successful payloads are cached even when no turn is waiting for them.
    /// A failure while a turn waits for `label` abandons the animation and
    /// navigates there directly.
    pub fn fetch_resolved(
        &mut self,
        label: &SpreadLabel,
        result: Result<SpreadPayload, FetchError>,
        now: Millis,
    ) -> Vec<Command> {
        let mut out = Vec::new();
        let awaiting = self.turn.phase() == TurnPhase::Loading && self.turn.target() == Some(label);
        match result {
            Ok(payload) => {
                let payload = self.cache.insert(payload);
                if awaiting {
                    self.start_turn_clock(payload, now, &mut out);
                }
            }
            Err(err) if awaiting => {
                warn!(%label, %err, "spread fetch failed, navigating without animation");
                if let Some(target) = self.turn.abort() {
                    self.viewport.set_interaction_suspended(false);
                    out.push(Command::Push(spread_location(&target)));
                }
            }
            Err(err) => debug!(%label, %err, "ignoring failure of a fetch nobody waits for"),
        }
        out
    }

    /// Advances the animation that owns `token` to `now`.
    ///
    /// Tokens that were cancelled or already delivered are ignored.
    pub fn frame(&mut self, token: FrameToken, now: Millis) -> Vec<Command> {
        let mut out = Vec::new();
        if !self.frames.complete(token) {
            return out;
        }
        if self.zoom_frame == Some(token) {
            self.zoom_frame = None;
            if self.viewport.tick(now) == ZoomTick::Running {
                self.request_zoom_frame(&mut out);
            }
        } else if self.turn_frame == Some(token) {
            self.turn_frame = None;
            match self.turn.tick(now) {
                TurnTick::Progress(_) => self.request_turn_frame(&mut out),
                TurnTick::Completed(target) => {
                    info!(%target, "turn landed");
                    out.push(Command::Push(spread_location(&target)));
                }
                TurnTick::Idle | TurnTick::Waiting | TurnTick::Settling => {}
            }
        }
        out
    }

    /// Reports that the host now shows `payload`.
    ///
    /// Completes a turn that landed on this spread. Showing some other spread
    /// while a turn is in progress abandons the turn.
    pub fn show(&mut self, payload: impl Into<Arc<SpreadPayload>>) -> Vec<Command> {
        let payload = self.cache.insert(payload);
        let mut out = Vec::new();
        if self.turn.is_turning() {
            if self.turn.confirm(&payload.label) {
                debug!(label = %payload.label, "turn settled");
            } else if payload.label != self.current.label {
                warn!(label = %payload.label, "turn abandoned for another spread");
                self.turn.abort();
                if let Some(token) = self.frames.cancel_slot(&mut self.turn_frame) {
                    out.push(Command::CancelFrame(token));
                }
            }
        }
        if !self.turn.is_turning() {
            self.viewport.set_interaction_suspended(false);
        }
        self.current = payload;
        out
    }

    /// Keyboard input.
    pub fn key(&mut self, key: Key, now: Millis) -> Vec<Command> {
        match key {
            Key::ArrowLeft => self.request_navigate(Direction::Prev, now),
            Key::ArrowRight => self.request_navigate(Direction::Next, now),
            Key::Escape => self.reset_zoom(now),
        }
    }

    /// Navigation bar input.
    pub fn button(&mut self, button: NavButton, now: Millis) -> Vec<Command> {
        if !self.is_enabled(button) {
            return Vec::new();
        }
        match button {
            NavButton::First => Self::jump(&self.current.first_label),
            NavButton::Last => Self::jump(&self.current.last_label),
            NavButton::Prev => self.request_navigate(Direction::Prev, now),
            NavButton::Next => self.request_navigate(Direction::Next, now),
            NavButton::ZoomIn => self.animate_zoom(now, SpreadViewport::zoom_in),
            NavButton::ZoomOut => self.animate_zoom(now, SpreadViewport::zoom_out),
        }
    }

    /// Whether `button` currently does anything.
    #[must_use]
    pub fn is_enabled(&self, button: NavButton) -> bool {
        if self.turn.is_turning() {
            return false;
        }
        match button {
            NavButton::First => !self.current.is_first(),
            NavButton::Last => !self.current.is_last(),
            NavButton::Prev => self.current.prev_label.is_some(),
            NavButton::Next => self.current.next_label.is_some(),
            NavButton::ZoomIn => self.viewport.can_zoom_in(),
            NavButton::ZoomOut => self.viewport.can_zoom_out(),
        }
    }

    /// Pointer pressed; starts a drag when zoomed in.
    pub fn pointer_down(&mut self, point: Point) {
        if !self.turn.is_turning() {
            self.viewport.pointer_down(point);
        }
    }

    /// Pointer moved; drags, or updates edge-hover feedback.
    pub fn pointer_move(&mut self, point: Point) {
        if self.turn.is_turning() || self.viewport.pointer_move(point) {
            return;
        }
        let hover = !self.viewport.is_zoomed_in() && self.edge_feedback(point);
        self.viewport.set_edge_hover(hover);
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.viewport.pointer_up();
    }

    /// Pointer left the view.
    pub fn pointer_leave(&mut self) {
        self.viewport.pointer_leave();
    }

    /// Double click toggles between 1× and the double-click zoom.
    pub fn double_click(&mut self, now: Millis) -> Vec<Command> {
        if self.turn.is_turning() {
            return Vec::new();
        }
        self.viewport.toggle_zoom(now);
        let mut out = Vec::new();
        self.request_zoom_frame(&mut out);
        out
    }

    /// Single click; turns when it lands in a page's outer-edge click zone.
    ///
    /// Each side has one click zone, so one click starts at most one turn.
    pub fn click(&mut self, point: Point, now: Millis) -> Vec<Command> {
        if self.turn.is_turning() || self.viewport.is_zoomed_in() {
            return Vec::new();
        }
        for slot in [Slot::Left, Slot::Right] {
            let direction = turn_direction(slot);
            if self.current.neighbor(direction).is_none() {
                continue;
            }
            let Some(rect) = self.layout.page(slot) else {
                continue;
            };
            if hit_test_edge(rect, point, outer_edge(slot), &self.edge_zones).click {
                return self.request_navigate(direction, now);
            }
        }
        Vec::new()
    }

    /// Cancels every outstanding frame request.
    pub fn teardown(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        for token in [
            self.frames.cancel_slot(&mut self.zoom_frame),
            self.frames.cancel_slot(&mut self.turn_frame),
        ]
        .into_iter()
        .flatten()
        {
            out.push(Command::CancelFrame(token));
        }
        self.frames.cancel_all();
        debug!(cancelled = out.len(), "navigator torn down");
        out
    }

    /// Cursor for the view.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.viewport.cursor()
    }

    /// Zoom readout, in percent.
    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.viewport.zoom_percent()
    }

    /// Position readout, `"<position> / <total>"`.
    #[must_use]
    pub fn position_text(&self) -> String {
        format!("{} / {}", self.current.position, self.current.total_steps)
    }

    /// Returns `true` while a turn is in progress.
    #[must_use]
    pub fn is_turning(&self) -> bool {
        self.turn.is_turning()
    }

    /// Phase of the page-turn machine.
    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// The running turn, for rendering.
    #[must_use]
    pub fn turn_scene(&self) -> Option<TurnScene<'_, Arc<SpreadPayload>>> {
        self.turn.scene()
    }

    /// The page drawn on the turning leaf.
    ///
    /// `None` when no leaf is moving, or when the spread lacks a page in the
    /// relevant slot (the leaf is then drawn blank).
    #[must_use]
    pub fn leaf_page(&self) -> Option<LeafFace<&PageView>> {
        let scene = self.turn.scene()?;
        match scene.face() {
            LeafFace::FirstHalf(from) => from
                .sides()
                .get(turning_slot(scene.direction))
                .map(LeafFace::FirstHalf),
            LeafFace::SecondHalf(to) => to
                .sides()
                .get(revealed_slot(scene.direction))
                .map(LeafFace::SecondHalf),
        }
    }

    fn jump(target: &SpreadLabel) -> Vec<Command> {
        info!(%target, "jumping without animation");
        vec![Command::Push(spread_location(target))]
    }

    fn reset_zoom(&mut self, now: Millis) -> Vec<Command> {
        if self.turn.is_turning() || !self.viewport.reset(now) {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.request_zoom_frame(&mut out);
        out
    }

    fn animate_zoom(
        &mut self,
        now: Millis,
        step: fn(&mut SpreadViewport, Millis) -> bool,
    ) -> Vec<Command> {
        let mut out = Vec::new();
        if step(&mut self.viewport, now) {
            self.request_zoom_frame(&mut out);
        }
        out
    }

    fn edge_feedback(&self, point: Point) -> bool {
        [Slot::Left, Slot::Right].into_iter().any(|slot| {
            self.layout
                .page(slot)
                .is_some_and(|rect| hit_test_edge(rect, point, outer_edge(slot), &self.edge_zones).pointer)
        })
    }

    fn start_turn_clock(&mut self, payload: Arc<SpreadPayload>, now: Millis, out: &mut Vec<Command>) {
        if self.turn.supply(payload, now) {
            self.request_turn_frame(out);
        }
    }

    fn request_zoom_frame(&mut self, out: &mut Vec<Command>) {
        if let Some(old) = self.frames.cancel_slot(&mut self.zoom_frame) {
            out.push(Command::CancelFrame(old));
        }
        let token = self.frames.request();
        self.zoom_frame = Some(token);
        out.push(Command::RequestFrame(token));
    }

    fn request_turn_frame(&mut self, out: &mut Vec<Command>) {
        if let Some(old) = self.frames.cancel_slot(&mut self.turn_frame) {
            out.push(Command::CancelFrame(old));
        }
        let token = self.frames.request();
        self.turn_frame = Some(token);
        out.push(Command::RequestFrame(token));
    }
}

#[cfg(test)]
mod tests {
    use flipbook_pagination::{Page, PageKind, PageSide};
    use flipbook_spread::Document;
    use flipbook_timing::FrameToken;
    use flipbook_turn::{LeafFace, TurnPhase};
    use kurbo::{Rect, Size};

    use super::Navigator;
    use crate::command::{Command, NavButton};
    use crate::config::NavigatorConfig;
    use crate::layout::SpreadLayout;

    fn document() -> Document {
        let pages = (0..16)
            .map(|n| {
                let (kind, side) = match n {
                    0 => (PageKind::Cover, PageSide::Cover),
                    15 => (PageKind::BackCover, PageSide::End),
                    n if n % 2 == 1 => (PageKind::Article, PageSide::Left),
                    _ => (PageKind::Article, PageSide::Right),
                };
                Page::new(format!("page-{n}"), n, kind, side)
            })
            .collect();
        Document::new(pages, Vec::new()).unwrap()
    }

    fn navigator(doc: &Document) -> Navigator {
        let mut nav = Navigator::new(NavigatorConfig::default(), doc.spread("1_2").unwrap());
        nav.set_layout(SpreadLayout {
            viewport: Size::new(1000.0, 700.0),
            content: Size::new(1000.0, 700.0),
            left: Some(Rect::new(100.0, 50.0, 450.0, 505.0)),
            right: Some(Rect::new(450.0, 50.0, 800.0, 505.0)),
        });
        nav
    }

    fn requested(commands: &[Command]) -> FrameToken {
        commands
            .iter()
            .rev()
            .find_map(|c| match c {
                Command::RequestFrame(token) => Some(*token),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn cached_destination_starts_the_clock_at_once() {
        let doc = document();
        let mut nav = navigator(&doc);
        let next = doc.spread("3_4").unwrap();
        let label = next.label.clone();
        assert!(nav.fetch_resolved(&label, Ok(next), 0).is_empty());
        assert!(nav.cache().contains(&label));

        let commands = nav.request_navigate(flipbook_pagination::Direction::Next, 10);
        assert!(matches!(commands.as_slice(), [Command::RequestFrame(_)]));
        assert_eq!(nav.turn_phase(), TurnPhase::Animating);
        assert!(nav.viewport().is_interaction_suspended());
    }

    #[test]
    fn superseded_zoom_frames_are_cancelled() {
        let doc = document();
        let mut nav = navigator(&doc);
        let first = nav.button(NavButton::ZoomIn, 0);
        let a = requested(&first);
        let second = nav.button(NavButton::ZoomIn, 5);
        let b = requested(&second);
        assert_eq!(second[0], Command::CancelFrame(a));
        assert_ne!(a, b);

        assert!(nav.frame(a, 16).is_empty());
        assert!(!nav.frame(b, 16).is_empty());
    }

    #[test]
    fn zoom_frames_stop_when_the_animation_ends() {
        let doc = document();
        let mut nav = navigator(&doc);
        let token = requested(&nav.button(NavButton::ZoomIn, 0));
        let token = requested(&nav.frame(token, 600));
        assert!(nav.frame(token, 1200).is_empty());
        assert_eq!(nav.zoom_percent(), 110);
        assert!(nav.frame(token, 1300).is_empty());
    }

    #[test]
    fn teardown_cancels_outstanding_frames() {
        let doc = document();
        let mut nav = navigator(&doc);
        let token = requested(&nav.double_click(0));
        assert_eq!(nav.teardown(), vec![Command::CancelFrame(token)]);
        assert!(nav.frame(token, 100).is_empty());
        assert!(nav.teardown().is_empty());
    }

    #[test]
    fn leaf_shows_outgoing_then_incoming_page() {
        let doc = document();
        let mut nav = navigator(&doc);
        assert!(nav.leaf_page().is_none());
        let commands = nav.request_navigate(flipbook_pagination::Direction::Next, 0);
        let Command::Fetch(label) = &commands[0] else {
            panic!("expected a fetch, got {commands:?}");
        };
        let label = label.clone();
        assert!(nav.leaf_page().is_none());

        let fetched = doc.spread(label.as_str()).map_err(Into::into);
        let token = requested(&nav.fetch_resolved(&label, fetched, 0));
        let token = requested(&nav.frame(token, 200));
        match nav.leaf_page() {
            Some(LeafFace::FirstHalf(page)) => assert_eq!(page.page.number, 2),
            other => panic!("unexpected leaf {other:?}"),
        }
        nav.frame(token, 1000);
        match nav.leaf_page() {
            Some(LeafFace::SecondHalf(page)) => assert_eq!(page.page.number, 3),
            other => panic!("unexpected leaf {other:?}"),
        }
    }

    #[test]
    fn buttons_disable_at_the_ends_and_while_turning() {
        let doc = document();
        let mut nav = Navigator::new(NavigatorConfig::default(), doc.spread("0").unwrap());
        assert!(!nav.is_enabled(NavButton::First));
        assert!(!nav.is_enabled(NavButton::Prev));
        assert!(nav.is_enabled(NavButton::Last));
        assert!(nav.button(NavButton::First, 0).is_empty());
        assert_eq!(
            nav.button(NavButton::Last, 0),
            vec![Command::Push("/flipbook/15".into())]
        );

        nav.request_navigate(flipbook_pagination::Direction::Next, 0);
        assert!(nav.is_turning());
        for button in [NavButton::Last, NavButton::Next, NavButton::ZoomIn] {
            assert!(!nav.is_enabled(button));
            assert!(nav.button(button, 0).is_empty());
        }
    }
}
