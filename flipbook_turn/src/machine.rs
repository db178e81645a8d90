// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::{Direction, SpreadLabel};
use flipbook_timing::{Millis, Tween};

use crate::geometry::TurnGeometry;
use crate::pose::{LeafFace, TurnPose};

/// Turn duration used by [`TurnMachine::default`].
pub const DEFAULT_TURN_DURATION_MS: Millis = 1400;

/// Where a turn is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// No turn.
    Idle,
    /// Waiting for the destination spread.
    Loading,
    /// The leaf is moving.
    Animating,
    /// The leaf has landed; waiting for the destination to become current.
    Settling,
}

/// A turn could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnRejected {
    /// Another turn is already in progress. Requests are never queued.
    #[error("a page turn is already in progress")]
    Busy,
}

/// Result of advancing the turn by one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnTick {
    /// No turn.
    Idle,
    /// The destination spread has not been supplied yet; no frame is needed.
    Waiting,
    /// The leaf moved; progress in `[0, 1)`.
    Progress(f64),
    /// The leaf landed on this frame. Navigate to the label. Reported once.
    Completed(SpreadLabel),
    /// Landed earlier; still waiting for [`TurnMachine::confirm`].
    Settling,
}

#[derive(Clone, Debug)]
struct Turn<P> {
    direction: Direction,
    target: SpreadLabel,
    from: P,
    to: Option<P>,
    geometry: TurnGeometry,
    clock: Option<Tween>,
    progress: f64,
    landed: bool,
}

/// Page-turn state machine.
///
/// Holds at most one turn. A turn goes through three phases:
///
/// 1. **Loading**: [`begin`](Self::begin) snapshots the outgoing spread and
///    the layout. Nothing moves until [`supply`](Self::supply) hands over the
///    destination spread, from a cache or a fetch.
/// 2. **Animating**: [`tick`](Self::tick) advances an eased progress value
///    from 0 to exactly 1. Progress never goes backwards.
/// 3. **Settling**: the leaf has landed and the host has been told to
///    navigate. [`confirm`](Self::confirm) returns to idle once the
///    destination is the current content.
///
/// [`abort`](Self::abort) leaves any phase immediately.
///
/// `P` is the spread payload type, kept opaque so the machine never inspects
/// page content.
#[derive(Clone, Debug)]
pub struct TurnMachine<P> {
    duration: Millis,
    turn: Option<Turn<P>>,
}

impl<P> Default for TurnMachine<P> {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_DURATION_MS)
    }
}

impl<P> TurnMachine<P> {
    /// Creates an idle machine whose turns last `duration` milliseconds.
    #[must_use]
    pub fn new(duration: Millis) -> Self {
        Self {
            duration,
            turn: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match &self.turn {
            None => TurnPhase::Idle,
            Some(turn) if turn.landed => TurnPhase::Settling,
            Some(turn) if turn.clock.is_some() => TurnPhase::Animating,
            Some(_) => TurnPhase::Loading,
        }
    }

    /// Returns `true` in any phase but [`TurnPhase::Idle`].
    #[must_use]
    pub fn is_turning(&self) -> bool {
        self.turn.is_some()
    }

    /// Direction of the current turn.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.turn.as_ref().map(|t| t.direction)
    }

    /// Destination of the current turn.
    #[must_use]
    pub fn target(&self) -> Option<&SpreadLabel> {
        self.turn.as_ref().map(|t| &t.target)
    }

    /// Last progress reported by [`tick`](Self::tick); 0 when idle.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.turn.as_ref().map_or(0.0, |t| t.progress)
    }

    /// Starts a turn toward `target`.
    ///
    /// Refused while another turn is in progress.
    pub fn begin(
        &mut self,
        direction: Direction,
        target: SpreadLabel,
        from: P,
        geometry: TurnGeometry,
    ) -> Result<(), TurnRejected> {
        if self.turn.is_some() {
            return Err(TurnRejected::Busy);
        }
        self.turn = Some(Turn {
            direction,
            target,
            from,
            to: None,
            geometry,
            clock: None,
            progress: 0.0,
            landed: false,
        });
        Ok(())
    }

    /// Hands over the destination spread and starts the clock at `now`.
    ///
    /// Returns `false`, dropping `to`, unless the machine is loading.
    pub fn supply(&mut self, to: P, now: Millis) -> bool {
        match &mut self.turn {
            Some(turn) if turn.clock.is_none() => {
                turn.to = Some(to);
                turn.clock = Some(Tween::new(now, self.duration));
                true
            }
            _ => false,
        }
    }

    /// Cancels the turn in whatever phase it is.
    ///
    /// Returns the destination label so the caller can still navigate there
    /// without animation.
    pub fn abort(&mut self) -> Option<SpreadLabel> {
        self.turn.take().map(|t| t.target)
    }

    /// Progress the turn would have at `now`, without advancing it.
    ///
    /// 0 while loading or idle, 1 once settling.
    #[must_use]
    pub fn progress_at(&self, now: Millis) -> f64 {
        let Some(turn) = &self.turn else {
            return 0.0;
        };
        if turn.landed {
            return 1.0;
        }
        turn.clock
            .map_or(0.0, |clock| clock.eased_at(now).max(turn.progress))
    }

    /// Advances the turn to `now`.
    pub fn tick(&mut self, now: Millis) -> TurnTick {
        let Some(turn) = &mut self.turn else {
            return TurnTick::Idle;
        };
        if turn.landed {
            return TurnTick::Settling;
        }
        let Some(clock) = turn.clock else {
            return TurnTick::Waiting;
        };
        if clock.is_finished(now) {
            turn.progress = 1.0;
            turn.landed = true;
            return TurnTick::Completed(turn.target.clone());
        }
        turn.progress = clock.eased_at(now).max(turn.progress);
        TurnTick::Progress(turn.progress)
    }

    /// Reports that `current` is now the content on screen.
    ///
    /// Ends a settling turn whose destination is `current` and returns
    /// `true`. Otherwise does nothing.
    pub fn confirm(&mut self, current: &SpreadLabel) -> bool {
        let settled = self
            .turn
            .as_ref()
            .is_some_and(|t| t.landed && t.target == *current);
        if settled {
            self.turn = None;
        }
        settled
    }

    /// Everything a renderer needs for the current frame.
    ///
    /// `None` unless the leaf is animating or settling.
    #[must_use]
    pub fn scene(&self) -> Option<TurnScene<'_, P>> {
        let turn = self.turn.as_ref()?;
        let to = turn.to.as_ref()?;
        Some(TurnScene {
            direction: turn.direction,
            from: &turn.from,
            to,
            geometry: turn.geometry,
            progress: turn.progress,
            pose: TurnPose::at(turn.progress, turn.direction, turn.geometry.gap),
        })
    }
}

/// A borrowed snapshot of a running turn.
#[derive(Debug)]
pub struct TurnScene<'a, P> {
    /// Turn direction.
    pub direction: Direction,
    /// The outgoing spread.
    pub from: &'a P,
    /// The incoming spread, drawn underneath the leaf.
    pub to: &'a P,
    /// Frozen layout.
    pub geometry: TurnGeometry,
    /// Progress in `[0, 1]`.
    pub progress: f64,
    /// Leaf pose for `progress`.
    pub pose: TurnPose,
}

impl<'a, P> TurnScene<'a, P> {
    /// Which spread the leaf shows.
    ///
    /// The outgoing spread supplies the page on the turning side (right for a
    /// next turn, left for a previous turn); the incoming spread supplies the
    /// page on the opposite side.
    #[must_use]
    pub fn face(&self) -> LeafFace<&'a P> {
        LeafFace::at(self.progress, self.from, self.to)
    }
}

impl<P> Clone for TurnScene<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TurnScene<'_, P> {}

#[cfg(test)]
mod tests {
    use flipbook_pagination::{Direction, Page, PageKind, PageSide, Pagination};
    use kurbo::{Rect, Size};

    use super::{TurnMachine, TurnPhase, TurnRejected, TurnTick};
    use crate::geometry::TurnGeometry;
    use crate::pose::LeafFace;

    fn pagination() -> Pagination {
        let pages = (0..16)
            .map(|n| Page::new(format!("p{n}"), n, PageKind::Article, PageSide::Left))
            .collect();
        Pagination::new(pages)
    }

    fn geometry() -> TurnGeometry {
        TurnGeometry::measure(
            Size::new(1000.0, 700.0),
            Some(Rect::new(90.0, 40.0, 490.0, 561.0)),
            Some(Rect::new(510.0, 40.0, 910.0, 561.0)),
            Direction::Next,
        )
    }

    #[test]
    fn full_cycle() {
        let p = pagination();
        let target = p.label(3).unwrap();
        let mut turn = TurnMachine::<&str>::default();
        assert_eq!(turn.phase(), TurnPhase::Idle);

        turn.begin(Direction::Next, target.clone(), "1_2", geometry()).unwrap();
        assert_eq!(turn.phase(), TurnPhase::Loading);
        assert_eq!(turn.tick(100), TurnTick::Waiting);
        assert!(turn.scene().is_none());

        assert!(turn.supply("3_4", 1000));
        assert_eq!(turn.phase(), TurnPhase::Animating);
        assert_eq!(turn.tick(1000), TurnTick::Progress(0.0));
        let TurnTick::Progress(mid) = turn.tick(1700) else {
            panic!("expected progress");
        };
        assert_eq!(mid, 0.5);
        let scene = turn.scene().unwrap();
        assert_eq!(scene.face(), LeafFace::SecondHalf(&"3_4"));
        assert_eq!(scene.pose.angle, -90.0);

        assert_eq!(turn.tick(2400), TurnTick::Completed(target.clone()));
        assert_eq!(turn.phase(), TurnPhase::Settling);
        assert_eq!(turn.progress(), 1.0);
        assert_eq!(turn.tick(2500), TurnTick::Settling);

        assert!(!turn.confirm(&p.label(1).unwrap()));
        assert!(turn.confirm(&target));
        assert_eq!(turn.phase(), TurnPhase::Idle);
        assert_eq!(turn.tick(2600), TurnTick::Idle);
    }

    #[test]
    fn second_turn_is_rejected() {
        let p = pagination();
        let mut turn = TurnMachine::<()>::new(1400);
        turn.begin(Direction::Next, p.label(3).unwrap(), (), geometry()).unwrap();
        assert_eq!(
            turn.begin(Direction::Prev, p.label(0).unwrap(), (), geometry()),
            Err(TurnRejected::Busy)
        );
        assert_eq!(turn.direction(), Some(Direction::Next));
    }

    #[test]
    fn abort_returns_the_target() {
        let p = pagination();
        let mut turn = TurnMachine::<()>::default();
        turn.begin(Direction::Prev, p.label(0).unwrap(), (), geometry()).unwrap();
        assert_eq!(turn.abort().as_ref().map(|l| l.as_str()), Some("0"));
        assert!(!turn.is_turning());
        assert_eq!(turn.abort(), None);
        assert!(!turn.supply((), 0));
    }

    #[test]
    fn progress_does_not_go_backwards() {
        let p = pagination();
        let mut turn = TurnMachine::<()>::default();
        turn.begin(Direction::Next, p.label(3).unwrap(), (), geometry()).unwrap();
        turn.supply((), 500);
        turn.tick(1200);
        let reached = turn.progress();
        // A stale timestamp must not rewind the leaf.
        assert_eq!(turn.tick(600), TurnTick::Progress(reached));
        assert_eq!(turn.progress_at(0), reached);
        assert!(turn.progress_at(1500) > reached);
    }

    #[test]
    fn supply_twice_is_ignored() {
        let p = pagination();
        let mut turn = TurnMachine::<u8>::default();
        turn.begin(Direction::Next, p.label(3).unwrap(), 1, geometry()).unwrap();
        assert!(turn.supply(2, 0));
        assert!(!turn.supply(3, 10));
        turn.tick(10);
        assert_eq!(*turn.scene().unwrap().to, 2);
    }
}
