use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::events::{FabDelegate, FabEvents};
use crate::item::FabItem;
use crate::motion::{FabMotion, MotionLevel, SpringCurve};
use crate::state::{self, Direction, FabState, TransitionStart};
use crate::{control, fab, layout};

static STATE_TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct StateTestGuard {
    _lock: MutexGuard<'static, ()>,
}

fn guard() -> StateTestGuard {
    let lock = match STATE_TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    control::clear_all();
    StateTestGuard { _lock: lock }
}

impl Drop for StateTestGuard {
    fn drop(&mut self) {
        control::clear_all();
    }
}

const STEP: Duration = Duration::from_millis(300);

fn t0() -> Instant {
    Instant::now()
}

#[test]
fn expand_is_idempotent_with_a_single_completion() {
    let mut fab = FabState::new();
    let start = t0();

    assert_eq!(fab.expand(start, STEP, true), TransitionStart::Animated);
    // Second call observes the already-updated logical state.
    assert_eq!(fab.expand(start, STEP, true), TransitionStart::NoOp);
    assert!(fab.is_expanded());

    // Before rest: nothing due yet.
    assert_eq!(fab.poll_completion(start + STEP / 2), None);
    // At rest: exactly one completion, then silence.
    assert_eq!(fab.poll_completion(start + STEP), Some(Direction::Expand));
    assert_eq!(fab.poll_completion(start + STEP * 2), None);
}

#[test]
fn collapse_when_already_collapsed_is_a_strict_noop() {
    let mut fab = FabState::new();
    let start = t0();

    assert_eq!(fab.collapse(start, STEP, true), TransitionStart::NoOp);
    assert!(!fab.is_expanded());
    assert!(fab.transition().is_none());
    assert!(!fab.scrim_visible());
    assert_eq!(fab.poll_completion(start + STEP), None);
}

#[test]
fn toggle_flips_between_both_states() {
    let mut fab = FabState::new();
    let start = t0();

    fab.toggle(start, STEP, true);
    assert!(fab.is_expanded());
    fab.toggle(start + STEP, STEP, true);
    assert!(!fab.is_expanded());
    fab.toggle(start + STEP * 2, STEP, true);
    assert!(fab.is_expanded());
}

#[test]
fn scrim_exists_from_expand_start_until_collapse_completion() {
    let mut fab = FabState::new();
    let start = t0();

    // Installed before the expand animation starts, so an outside tap
    // already works mid-flight.
    fab.expand(start, STEP, true);
    assert!(fab.scrim_visible());

    // Still present while the collapse animation runs.
    fab.collapse(start + STEP, STEP, true);
    assert!(fab.scrim_visible());

    // Gone once the collapse settles.
    assert_eq!(
        fab.poll_completion(start + STEP * 2),
        Some(Direction::Collapse)
    );
    assert!(!fab.scrim_visible());
}

#[test]
fn non_animated_moves_settle_synchronously() {
    let mut fab = FabState::new();
    let start = t0();

    assert_eq!(fab.expand(start, STEP, false), TransitionStart::Immediate);
    assert!(fab.is_expanded());
    assert!(fab.transition().is_none());
    assert_eq!(fab.progress(start), 1.0);
    assert_eq!(fab.poll_completion(start), Some(Direction::Expand));
    assert_eq!(fab.poll_completion(start), None);
}

#[test]
fn zero_duration_behaves_like_non_animated() {
    let mut fab = FabState::new();
    let start = t0();

    assert_eq!(
        fab.expand(start, Duration::ZERO, true),
        TransitionStart::Immediate
    );
    assert_eq!(fab.poll_completion(start), Some(Direction::Expand));
}

#[test]
fn retarget_restarts_from_the_eased_visual_value() {
    let mut fab = FabState::new();
    let start = t0();

    fab.expand(start, STEP, true);
    let first = fab.transition().expect("expand transition");

    // Reverse halfway through: override, never queue. The new transition
    // starts from the eased value on screen, not the raw timeline fraction,
    // so there is no backwards snap.
    let midway = start + STEP / 2;
    let rendered = fab.progress(midway);
    assert!(rendered > 0.8, "spring is well past the linear half: {rendered}");
    fab.collapse(midway, STEP, true);
    let second = fab.transition().expect("collapse transition");

    assert_eq!(second.direction, Direction::Collapse);
    assert!(second.seq > first.seq);
    assert!((second.from_progress - rendered).abs() < 1e-6);
    assert!((fab.progress(midway) - rendered).abs() < 1e-6);
    assert_eq!(second.started_at, midway);

    // Only the overriding transition ever completes.
    assert_eq!(
        fab.poll_completion(midway + STEP),
        Some(Direction::Collapse)
    );
    assert_eq!(fab.poll_completion(midway + STEP * 2), None);
    assert!(!fab.is_expanded());
}

#[test]
fn progress_follows_the_spring_and_rests_at_the_logical_state() {
    let mut fab = FabState::new();
    let start = t0();
    assert_eq!(fab.progress(start), 0.0);

    fab.expand(start, STEP, true);
    assert_eq!(fab.progress(start), 0.0);
    // Mid-flight the state machine reports the same eased value the
    // animation renders.
    let expected = SpringCurve::default().evaluate(0.5);
    assert!((fab.progress(start + STEP / 2) - expected).abs() < 1e-3);
    assert_eq!(fab.progress(start + STEP), 1.0);

    let _ = fab.poll_completion(start + STEP);
    assert!(fab.transition().is_none());
    assert_eq!(fab.progress(start + STEP * 3), 1.0);
}

#[test]
fn keyed_store_round_trips_state_per_component() {
    let _guard = guard();

    let start = t0();
    let outcome = state::apply("fab-a", |s| s.expand(start, STEP, true));
    assert_eq!(outcome, Some(TransitionStart::Animated));

    assert!(state::resolve("fab-a").is_expanded());
    assert!(!state::resolve("fab-b").is_expanded());
}

#[test]
fn controlled_sync_seeds_at_rest_then_animates_changes() {
    let _guard = guard();

    let start = t0();
    // First sighting settles directly at the controlled value: no animation
    // and no completion event on mount.
    state::sync_controlled("fab-c", true, start, STEP);
    let seeded = state::resolve("fab-c");
    assert!(seeded.is_expanded());
    assert!(seeded.transition().is_none());
    assert_eq!(
        state::apply("fab-c", |s| s.poll_completion(start)).flatten(),
        None
    );

    // A later prop flip animates like any other transition.
    state::sync_controlled("fab-c", false, start, STEP);
    let flipped = state::resolve("fab-c");
    assert!(!flipped.is_expanded());
    assert_eq!(
        flipped.transition().map(|t| t.direction),
        Some(Direction::Collapse)
    );

    // Re-sending the same value is a no-op.
    state::sync_controlled("fab-c", false, start, STEP);
    let unchanged = state::resolve("fab-c");
    assert_eq!(unchanged.transition().map(|t| t.seq), flipped.transition().map(|t| t.seq));
}

#[test]
fn items_len_guards_stale_indices() {
    let _guard = guard();

    control::set_items_len("fab-d", 3);
    assert_eq!(control::items_len("fab-d"), 3);

    // Simulates a tap handler built for index 2 racing a replacement that
    // shrank the list: the guard drops it silently.
    control::set_items_len("fab-d", 1);
    let stale_index = 2;
    assert!(stale_index >= control::items_len("fab-d"));
}

#[test]
fn replacing_items_leaves_expansion_untouched() {
    let _guard = guard();

    let start = t0();
    let _ = state::apply("fab-e", |s| s.expand(start, STEP, false));
    let _ = state::apply("fab-e", |s| s.poll_completion(start));

    // A full item replacement only updates the rendered-list bookkeeping.
    control::set_items_len("fab-e", 5);
    control::set_items_len("fab-e", 2);

    assert!(state::resolve("fab-e").is_expanded());
}

struct RecordingDelegate {
    log: Rc<RefCell<Vec<&'static str>>>,
    last_index: std::cell::Cell<usize>,
}

impl FabDelegate for RecordingDelegate {
    fn on_item_tap(&self, _item: &FabItem, index: usize) {
        self.log.borrow_mut().push("delegate");
        self.last_index.set(index);
    }
}

#[test]
fn item_tap_routing_notifies_then_invokes_then_collapses() {
    let _guard = guard();

    let log = Rc::new(RefCell::new(Vec::new()));
    let observer = Rc::new(RecordingDelegate {
        log: Rc::clone(&log),
        last_index: std::cell::Cell::new(usize::MAX),
    });
    let mut events = FabEvents::new();
    events.set_delegate(Rc::downgrade(&observer) as Weak<dyn FabDelegate>);

    let id = "fab-routing";
    let item = FabItem::new("b", "B");
    control::set_items_len(id, 2);
    let start = t0();
    let _ = state::apply(id, |s| s.expand(start, STEP, false));
    let _ = state::apply(id, |s| s.poll_completion(start));

    let routed = fab::route_item_tap(id, &item, 1, &events, STEP, false, |_, _| {
        log.borrow_mut().push("action");
    });

    assert!(routed);
    assert_eq!(*log.borrow(), vec!["delegate", "action"]);
    assert_eq!(observer.last_index.get(), 1);
    assert!(!state::resolve(id).is_expanded());
}

#[test]
fn item_tap_routing_drops_stale_indices_before_any_side_effect() {
    let _guard = guard();

    let log = Rc::new(RefCell::new(Vec::new()));
    let observer = Rc::new(RecordingDelegate {
        log: Rc::clone(&log),
        last_index: std::cell::Cell::new(usize::MAX),
    });
    let mut events = FabEvents::new();
    events.set_delegate(Rc::downgrade(&observer) as Weak<dyn FabDelegate>);

    let id = "fab-stale";
    let item = FabItem::new("c", "C");
    let start = t0();
    let _ = state::apply(id, |s| s.expand(start, STEP, false));
    let _ = state::apply(id, |s| s.poll_completion(start));

    // The handler was built against a 3-item list; a replacement shrank it.
    control::set_items_len(id, 1);
    let routed = fab::route_item_tap(id, &item, 2, &events, STEP, false, |_, _| {
        log.borrow_mut().push("action");
    });

    assert!(!routed);
    assert!(log.borrow().is_empty());
    assert!(state::resolve(id).is_expanded());
}

#[test]
fn programmatic_calls_respect_the_motion_level() {
    let _guard = guard();

    let config = crate::config::FabConfig::default();
    let quiet = FabMotion::new().level(MotionLevel::None);

    // With motion disabled the scaled duration is zero, so even an animated
    // request settles synchronously.
    assert_eq!(
        fab::expand("fab-prog", &config, &quiet, true),
        TransitionStart::Immediate
    );
    assert!(fab::is_expanded("fab-prog"));

    assert_eq!(
        fab::collapse("fab-prog", &config, &FabMotion::default(), true),
        TransitionStart::Animated
    );
}

#[test]
fn geometry_law_holds_for_any_item_count() {
    for n in 0..5 {
        assert_eq!(layout::container_width(false), 56.0);
        assert_eq!(layout::container_width(true), 200.0);
        assert_eq!(layout::container_height(n), n as f32 * 70.0 + 56.0);
    }
}
