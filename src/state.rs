//! Expand/collapse state machine.
//!
//! The logical `expanded` flag flips synchronously when a transition starts;
//! the visual move toward the new rest state happens over an animated
//! [`Transition`]. Guards run before any side effect, so repeated calls in
//! the same direction are strict no-ops: one event, one scrim, no matter how
//! often a tap handler fires.

use std::time::{Duration, Instant};

use crate::control;
use crate::motion::SpringCurve;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Expand,
    Collapse,
}

impl Direction {
    pub fn target_progress(&self) -> f32 {
        match self {
            Direction::Expand => 1.0,
            Direction::Collapse => 0.0,
        }
    }
}

/// Outcome of an `expand`/`collapse` call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionStart {
    /// Already at the target state; nothing happened.
    NoOp,
    /// Jumped straight to rest; the completion event is due now.
    Immediate,
    /// A transition is in flight; the completion event fires when it ends.
    Animated,
}

/// An in-flight animated move between rest states.
///
/// `seq` increments on every start so per-element animations replay; a new
/// transition while one is in flight restarts from the current eased visual
/// progress rather than queueing (override, never queue). The spring rides
/// along so [`Transition::progress`] reports the same value the rendered
/// animation shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub direction: Direction,
    pub seq: u64,
    pub started_at: Instant,
    pub duration: Duration,
    pub from_progress: f32,
    pub spring: SpringCurve,
}

impl Transition {
    /// Raw timeline fraction in `[0, 1]`, before easing.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased visual progress (0 = collapsed rest, 1 = expanded rest). This is
    /// exactly the value the rendered animation applies at `now`, so a
    /// retarget that captures it starts with no visible jump.
    pub fn progress(&self, now: Instant) -> f32 {
        let target = self.direction.target_progress();
        self.from_progress + (target - self.from_progress) * self.spring.evaluate(self.fraction(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabState {
    expanded: bool,
    transition: Option<Transition>,
    /// Completion that settled synchronously (non-animated move) and has not
    /// been polled yet. Overridden, never queued, like transitions.
    pending: Option<Direction>,
    next_seq: u64,
    spring: SpringCurve,
}

impl Default for FabState {
    fn default() -> Self {
        Self::new()
    }
}

impl FabState {
    pub fn new() -> Self {
        Self::at_rest(false)
    }

    /// A state already settled at `expanded`, with no completion due.
    pub fn at_rest(expanded: bool) -> Self {
        Self {
            expanded,
            transition: None,
            pending: None,
            next_seq: 0,
            spring: SpringCurve::default(),
        }
    }

    /// Easing used by transitions started from this state. The component
    /// syncs it from its motion profile on every render.
    pub fn set_spring(&mut self, value: SpringCurve) {
        self.spring = value;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Visual progress at `now`: the in-flight interpolation, or the rest
    /// value for the logical state.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.transition {
            Some(transition) => transition.progress(now),
            None => {
                if self.expanded {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// The dismiss surface exists from the moment an expand starts until a
    /// collapse *finishes*, so an outside tap works during both animations.
    pub fn scrim_visible(&self) -> bool {
        if self.expanded {
            return true;
        }
        matches!(
            self.transition,
            Some(Transition {
                direction: Direction::Collapse,
                ..
            })
        )
    }

    pub fn expand(&mut self, now: Instant, duration: Duration, animated: bool) -> TransitionStart {
        if self.expanded {
            return TransitionStart::NoOp;
        }
        let from_progress = self.progress(now);
        self.expanded = true;
        self.begin(Direction::Expand, from_progress, now, duration, animated)
    }

    pub fn collapse(&mut self, now: Instant, duration: Duration, animated: bool) -> TransitionStart {
        if !self.expanded {
            return TransitionStart::NoOp;
        }
        let from_progress = self.progress(now);
        self.expanded = false;
        self.begin(Direction::Collapse, from_progress, now, duration, animated)
    }

    pub fn toggle(&mut self, now: Instant, duration: Duration, animated: bool) -> TransitionStart {
        if self.expanded {
            self.collapse(now, duration, animated)
        } else {
            self.expand(now, duration, animated)
        }
    }

    fn begin(
        &mut self,
        direction: Direction,
        from_progress: f32,
        now: Instant,
        duration: Duration,
        animated: bool,
    ) -> TransitionStart {
        if !animated || duration.is_zero() {
            self.transition = None;
            self.pending = Some(direction);
            return TransitionStart::Immediate;
        }

        self.pending = None;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.transition = Some(Transition {
            direction,
            seq,
            started_at: now,
            duration,
            from_progress,
            spring: self.spring,
        });
        TransitionStart::Animated
    }

    /// Consumes a due completion, once. Returns the direction whose
    /// completion event should fire.
    pub fn poll_completion(&mut self, now: Instant) -> Option<Direction> {
        if let Some(direction) = self.pending.take() {
            return Some(direction);
        }
        let transition = self.transition?;
        if !transition.is_finished(now) {
            return None;
        }
        self.transition = None;
        Some(transition.direction)
    }
}

/// Snapshot of the keyed entry for `id`, created collapsed if absent.
pub fn resolve(id: &str) -> FabState {
    control::fab_state(id)
}

pub fn apply<R>(id: &str, apply: impl FnOnce(&mut FabState) -> R) -> Option<R> {
    control::update_fab_state(id, apply)
}

/// First-render initialization: inserts a settled state if `id` is unknown,
/// without animating or firing anything.
pub fn seed(id: &str, expanded: bool) {
    if !control::contains_fab(id) {
        control::set_fab_state(id, FabState::at_rest(expanded));
    }
}

/// Controlled mode: the host owns the logical flag; drive the stored state
/// toward it so prop flips still animate. The first sighting of `id` settles
/// directly at the controlled value instead of animating open on mount.
pub fn sync_controlled(id: &str, expanded: bool, now: Instant, duration: Duration) {
    if !control::contains_fab(id) {
        control::set_fab_state(id, FabState::at_rest(expanded));
        return;
    }
    let _ = control::update_fab_state(id, |state| {
        if expanded {
            state.expand(now, duration, true)
        } else {
            state.collapse(now, duration, true)
        }
    });
}
