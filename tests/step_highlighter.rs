use std::cell::RefCell;
use std::rc::Rc;

use std::cell::Cell;

use waynaa_web::highlight::engine::{self, ChangeListener};
use waynaa_web::highlight::style::step_classes;
use waynaa_web::highlight::{
    ObservationState, ObserverError, Scheduler, StepHighlighter, VisibilityEntry,
    VisibilityObserver,
};

#[derive(Default)]
struct ObserverLog {
    observed: Vec<u32>,
    unobserved: Vec<u32>,
    disconnected: bool,
}

/// Observer over plain element ids that records what it was asked to do.
struct FakeObserver {
    log: Rc<RefCell<ObserverLog>>,
}

impl VisibilityObserver for FakeObserver {
    type Target = u32;

    fn observe(&mut self, target: &u32) {
        self.log.borrow_mut().observed.push(*target);
    }

    fn unobserve(&mut self, target: &u32) {
        self.log.borrow_mut().unobserved.push(*target);
    }

    fn disconnect(&mut self) {
        self.log.borrow_mut().disconnected = true;
    }
}

struct PendingTask {
    id: u64,
    due: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: u64,
    next_id: u64,
    tasks: Vec<PendingTask>,
}

/// Scheduler driven by hand: tasks only run inside `advance`.
#[derive(Clone, Default)]
struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

struct ManualHandle {
    id: u64,
    state: Rc<RefCell<ClockState>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().tasks.retain(|t| t.id != self.id);
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + u64::from(delay_ms);
        state.tasks.push(PendingTask { id, due, task });
        ManualHandle {
            id,
            state: self.state.clone(),
        }
    }
}

impl ManualClock {
    fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let earliest = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                earliest.map(|i| {
                    let pending = state.tasks.remove(i);
                    state.now = pending.due;
                    pending.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }
}

struct Harness {
    highlighter: StepHighlighter<FakeObserver, ManualClock>,
    clock: ManualClock,
    log: Rc<RefCell<ObserverLog>>,
    changes: Rc<RefCell<Vec<ObservationState>>>,
}

/// Element ids are `100 + index` so they never collide with step indices.
fn element(index: usize) -> u32 {
    100 + index as u32
}

fn harness(step_count: usize) -> Harness {
    let clock = ManualClock::default();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let on_change: ChangeListener = {
        let changes = changes.clone();
        Rc::new(move |snapshot: ObservationState| changes.borrow_mut().push(snapshot))
    };
    let highlighter = StepHighlighter::new(clock.clone(), 1000, on_change);

    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let observer = FakeObserver { log: log.clone() };
    highlighter.attach(observer, (0..step_count).map(element).collect());

    Harness {
        highlighter,
        clock,
        log,
        changes,
    }
}

fn visible(index: usize) -> VisibilityEntry<u32> {
    VisibilityEntry::new(element(index), true)
}

fn hidden(index: usize) -> VisibilityEntry<u32> {
    VisibilityEntry::new(element(index), false)
}

fn emphasized_count(state: &ObservationState, step_count: usize) -> usize {
    (0..step_count).filter(|&i| state.is_emphasized(i)).count()
}

#[test]
fn test_reached_step_highlights_then_clears() {
    let h = harness(5);
    assert_eq!(h.log.borrow().observed, vec![100, 101, 102, 103, 104]);

    h.highlighter.handle_batch(&[visible(2)]);
    let state = h.highlighter.state();
    assert_eq!(state.active_step, Some(2));
    assert_eq!(state.highlighted_step, Some(2));

    h.clock.advance(999);
    assert_eq!(h.highlighter.state().highlighted_step, Some(2));

    h.clock.advance(1);
    let state = h.highlighter.state();
    assert_eq!(state.highlighted_step, None);
    assert_eq!(state.active_step, Some(2));
    assert_eq!(h.changes.borrow().len(), 2);
}

#[test]
fn test_batches_reach_engine_through_observer_callback() {
    let h = harness(3);
    let handler = h.highlighter.batch_handler();

    handler(vec![visible(1)]);
    assert_eq!(h.highlighter.state().active_step, Some(1));
}

#[test]
fn test_newer_highlight_survives_older_timer() {
    let h = harness(5);

    h.highlighter.handle_batch(&[visible(1)]);
    h.clock.advance(600);
    h.highlighter.handle_batch(&[visible(2)]);
    assert_eq!(h.clock.pending(), 1);

    // The first clear would have been due now.
    h.clock.advance(400);
    assert_eq!(h.highlighter.state().highlighted_step, Some(2));

    h.clock.advance(600);
    let state = h.highlighter.state();
    assert_eq!(state.highlighted_step, None);
    assert_eq!(state.active_step, Some(2));
}

#[test]
fn test_last_visible_entry_in_batch_wins() {
    let h = harness(5);

    h.highlighter.handle_batch(&[visible(3), hidden(4), visible(1)]);
    let state = h.highlighter.state();
    assert_eq!(state.active_step, Some(1));
    assert_eq!(state.highlighted_step, Some(1));
}

#[test]
fn test_batches_without_visible_steps_change_nothing() {
    let h = harness(5);

    h.highlighter.handle_batch(&[hidden(0), hidden(1)]);
    h.highlighter.handle_batch(&[VisibilityEntry::new(999, true)]);
    assert_eq!(h.highlighter.state(), ObservationState::default());
    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn test_active_step_never_decreases_on_downward_scroll() {
    let h = harness(5);
    let mut last_active = None;

    for index in 0..5 {
        let mut batch = vec![visible(index)];
        if index > 0 {
            batch.insert(0, hidden(index - 1));
        }
        h.highlighter.handle_batch(&batch);
        // Quiet scroll ticks in between.
        h.highlighter.handle_batch(&[hidden(index)]);
        h.clock.advance(250);

        let active = h.highlighter.state().active_step;
        assert!(active >= last_active);
        assert_eq!(active, Some(index));
        last_active = active;
    }
}

#[test]
fn test_at_most_one_step_emphasized_after_settling() {
    let h = harness(5);

    for index in [0, 1, 2, 3] {
        h.highlighter.handle_batch(&[visible(index)]);
        h.clock.advance(100);
        assert!(emphasized_count(&h.highlighter.state(), 5) <= 1);
    }
    h.clock.advance(1000);

    let state = h.highlighter.state();
    assert_eq!(emphasized_count(&state, 5), 1);
    assert_ne!(step_classes(3, &state), step_classes(2, &state));
}

#[test]
fn test_teardown_cancels_pending_clear() {
    let h = harness(5);

    h.highlighter.handle_batch(&[visible(4)]);
    let before = h.highlighter.state();
    h.highlighter.teardown();

    assert!(h.log.borrow().disconnected);
    assert_eq!(h.clock.pending(), 0);

    h.clock.advance(5000);
    h.highlighter.handle_batch(&[visible(0)]);
    assert_eq!(h.highlighter.state(), before);
    assert_eq!(h.changes.borrow().len(), 1);
}

#[test]
fn test_late_batch_after_teardown_is_ignored() {
    let h = harness(2);
    let handler = h.highlighter.batch_handler();
    h.highlighter.teardown();

    handler(vec![visible(0)]);
    assert_eq!(h.highlighter.state(), ObservationState::default());
    assert!(h.changes.borrow().is_empty());
}

#[test]
fn test_zero_steps_registers_nothing() {
    let h = harness(0);
    assert!(h.log.borrow().observed.is_empty());

    h.highlighter.handle_batch(&[visible(0)]);
    assert_eq!(h.highlighter.state(), ObservationState::default());
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn test_reattach_drops_stale_targets() {
    let h = harness(2);

    let fresh_log = Rc::new(RefCell::new(ObserverLog::default()));
    let fresh = FakeObserver {
        log: fresh_log.clone(),
    };
    h.highlighter.attach(fresh, vec![7, 8, 9]);

    {
        let old = h.log.borrow();
        assert_eq!(old.unobserved, vec![100, 101]);
        assert!(old.disconnected);
    }
    assert_eq!(fresh_log.borrow().observed, vec![7, 8, 9]);

    h.highlighter.handle_batch(&[visible(1)]);
    assert_eq!(h.highlighter.state().active_step, None);

    h.highlighter.handle_batch(&[VisibilityEntry::new(9, true)]);
    assert_eq!(h.highlighter.state().active_step, Some(2));
}

#[test]
fn test_attach_after_teardown_disconnects_immediately() {
    let h = harness(1);
    h.highlighter.teardown();

    let late_log = Rc::new(RefCell::new(ObserverLog::default()));
    h.highlighter.attach(
        FakeObserver {
            log: late_log.clone(),
        },
        vec![1],
    );

    let late = late_log.borrow();
    assert!(late.observed.is_empty());
    assert!(late.disconnected);
}

fn recording_listener() -> (ChangeListener, Rc<RefCell<Vec<ObservationState>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let listener: ChangeListener = {
        let changes = changes.clone();
        Rc::new(move |snapshot: ObservationState| changes.borrow_mut().push(snapshot))
    };
    (listener, changes)
}

#[test]
fn test_start_without_observer_support_stays_static() {
    let clock = ManualClock::default();
    let (listener, changes) = recording_listener();

    let highlighter = engine::start::<FakeObserver, _, _>(
        3,
        (0..3).map(element).collect(),
        |_| Err(ObserverError::Unsupported),
        clock.clone(),
        1000,
        listener,
    );

    assert!(highlighter.is_none());
    assert_eq!(*changes.borrow(), vec![ObservationState::default()]);
    assert_eq!(clock.pending(), 0);
}

#[test]
fn test_start_with_failing_observer_constructor_stays_static() {
    let (listener, changes) = recording_listener();

    let highlighter = engine::start::<FakeObserver, _, _>(
        2,
        (0..2).map(element).collect(),
        |_| Err(ObserverError::Construction("SyntaxError".to_string())),
        ManualClock::default(),
        1000,
        listener,
    );

    assert!(highlighter.is_none());
    assert_eq!(changes.borrow().last(), Some(&ObservationState::default()));
}

#[test]
fn test_start_with_partially_mounted_steps_stays_static() {
    let (listener, changes) = recording_listener();
    let built = Cell::new(false);

    let highlighter = engine::start::<FakeObserver, _, _>(
        5,
        (0..3).map(element).collect(),
        |_| {
            built.set(true);
            Ok(FakeObserver {
                log: Rc::new(RefCell::new(ObserverLog::default())),
            })
        },
        ManualClock::default(),
        1000,
        listener,
    );

    assert!(highlighter.is_none());
    assert!(!built.get());
    assert_eq!(*changes.borrow(), vec![ObservationState::default()]);
}

#[test]
fn test_start_with_no_steps_builds_no_observer() {
    let (listener, changes) = recording_listener();
    let built = Cell::new(false);

    let highlighter = engine::start::<FakeObserver, _, _>(
        0,
        Vec::new(),
        |_| {
            built.set(true);
            Err(ObserverError::Unsupported)
        },
        ManualClock::default(),
        1000,
        listener,
    );

    assert!(highlighter.is_none());
    assert!(!built.get());
    assert_eq!(*changes.borrow(), vec![ObservationState::default()]);
}

#[test]
fn test_start_wires_observer_batches_into_highlighter() {
    let clock = ManualClock::default();
    let (listener, _changes) = recording_listener();
    let log = Rc::new(RefCell::new(ObserverLog::default()));
    let handler_slot: Rc<RefCell<Option<engine::BatchHandler<u32>>>> = Rc::new(RefCell::new(None));

    let highlighter = engine::start(
        4,
        (0..4).map(element).collect(),
        |handler| {
            *handler_slot.borrow_mut() = Some(handler);
            Ok(FakeObserver { log: log.clone() })
        },
        clock.clone(),
        1000,
        listener,
    )
    .unwrap();

    assert_eq!(log.borrow().observed, vec![100, 101, 102, 103]);
    if let Some(handler) = handler_slot.borrow().as_ref() {
        handler(vec![visible(3)]);
    }
    assert_eq!(highlighter.state().highlighted_step, Some(3));
}

#[test]
fn test_restart_after_teardown_leaves_no_stale_highlight() {
    let clock = ManualClock::default();
    let (listener, changes) = recording_listener();
    let log = Rc::new(RefCell::new(ObserverLog::default()));

    let first = engine::start(
        5,
        (0..5).map(element).collect(),
        |_| Ok(FakeObserver { log: log.clone() }),
        clock.clone(),
        1000,
        listener.clone(),
    )
    .unwrap();
    first.handle_batch(&[visible(4)]);
    assert_eq!(changes.borrow().last().and_then(|s| s.highlighted_step), Some(4));

    // The step list shrinks before the clear fires.
    first.teardown();
    let second = engine::start(
        2,
        (0..2).map(element).collect(),
        |_| Ok(FakeObserver { log: log.clone() }),
        clock.clone(),
        1000,
        listener,
    )
    .unwrap();

    clock.advance(2000);
    let shown = changes.borrow().last().copied().unwrap();
    assert_eq!(shown, ObservationState::default());
    assert_eq!(second.state(), ObservationState::default());
    assert_eq!(clock.pending(), 0);
}
