use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::highlight::observer::{ObserverError, VisibilityObserver};
use crate::highlight::scheduler::Scheduler;
use crate::highlight::state::{resolve_batch, ObservationState, VisibilityEntry};

/// Listener notified with a fresh snapshot after every state change.
pub type ChangeListener = Rc<dyn Fn(ObservationState)>;

/// Batch callback handed to an observer while it is being built.
pub type BatchHandler<T> = Box<dyn Fn(Vec<VisibilityEntry<T>>)>;

/// Drives the active/highlighted step of a timeline from visibility batches.
///
/// The highlighter owns the observer and the pending clear task. After
/// [`StepHighlighter::teardown`] both are gone and no further change is
/// reported, even if a batch or timer was already in flight.
pub struct StepHighlighter<O: VisibilityObserver, S: Scheduler> {
    inner: Rc<RefCell<Inner<O, S>>>,
}

struct Inner<O: VisibilityObserver, S: Scheduler> {
    state: ObservationState,
    targets: Vec<O::Target>,
    observer: Option<O>,
    scheduler: S,
    pending_clear: Option<S::Handle>,
    clear_delay_ms: u32,
    on_change: ChangeListener,
    torn_down: bool,
}

impl<O, S> StepHighlighter<O, S>
where
    O: VisibilityObserver + 'static,
    S: Scheduler + 'static,
{
    pub fn new(scheduler: S, clear_delay_ms: u32, on_change: ChangeListener) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: ObservationState::default(),
                targets: Vec::new(),
                observer: None,
                scheduler,
                pending_clear: None,
                clear_delay_ms,
                on_change,
                torn_down: false,
            })),
        }
    }

    /// Callback to hand to the observer. It holds only a weak reference, so
    /// the observer never keeps the highlighter alive.
    pub fn batch_handler(&self) -> impl Fn(Vec<VisibilityEntry<O::Target>>) + 'static {
        let weak = Rc::downgrade(&self.inner);
        move |entries| {
            if let Some(inner) = weak.upgrade() {
                handle_batch(&inner, &entries);
            }
        }
    }

    /// Starts watching `targets`, in step order. Targets from an earlier
    /// call are unobserved first.
    pub fn attach(&self, mut observer: O, targets: Vec<O::Target>) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down {
            observer.disconnect();
            return;
        }

        if let Some(mut previous) = inner.observer.take() {
            for target in &inner.targets {
                previous.unobserve(target);
            }
            previous.disconnect();
        }

        for target in &targets {
            observer.observe(target);
        }
        log::info!("Observing {} timeline steps", targets.len());
        inner.targets = targets;
        inner.observer = Some(observer);
    }

    pub fn handle_batch(&self, entries: &[VisibilityEntry<O::Target>]) {
        handle_batch(&self.inner, entries);
    }

    pub fn state(&self) -> ObservationState {
        self.inner.borrow().state
    }

    /// Disconnects the observer and cancels any pending clear.
    pub fn teardown(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down {
            return;
        }
        inner.torn_down = true;
        inner.pending_clear = None;
        if let Some(mut observer) = inner.observer.take() {
            observer.disconnect();
        }
        inner.targets.clear();
        log::info!("Step highlighter torn down");
    }
}

/// Starts a highlighter for a timeline of `expected` steps.
///
/// The listener is first reset to an unset state, so nothing from an earlier
/// registration survives. Returns `None`, leaving the timeline static, when
/// there are no steps, when some step elements are missing from `targets`,
/// or when `make_observer` fails.
pub fn start<O, S, F>(
    expected: usize,
    targets: Vec<O::Target>,
    make_observer: F,
    scheduler: S,
    clear_delay_ms: u32,
    on_change: ChangeListener,
) -> Option<StepHighlighter<O, S>>
where
    O: VisibilityObserver + 'static,
    S: Scheduler + 'static,
    F: FnOnce(BatchHandler<O::Target>) -> Result<O, ObserverError>,
{
    on_change(ObservationState::default());

    if expected == 0 {
        return None;
    }
    if targets.len() != expected {
        log::warn!(
            "Only {} of {} timeline steps are mounted, highlight disabled",
            targets.len(),
            expected
        );
        return None;
    }

    let highlighter = StepHighlighter::new(scheduler, clear_delay_ms, on_change);
    match make_observer(Box::new(highlighter.batch_handler())) {
        Ok(observer) => {
            highlighter.attach(observer, targets);
            Some(highlighter)
        }
        Err(e) => {
            log::warn!("Rendering static timeline: {}", e);
            None
        }
    }
}

fn handle_batch<O, S>(cell: &Rc<RefCell<Inner<O, S>>>, entries: &[VisibilityEntry<O::Target>])
where
    O: VisibilityObserver + 'static,
    S: Scheduler + 'static,
{
    let (snapshot, on_change) = {
        let mut inner = cell.borrow_mut();
        if inner.torn_down {
            return;
        }
        let Some(index) = resolve_batch(entries, &inner.targets) else {
            return;
        };

        let generation = inner.state.reach(index);
        log::debug!("Step {} reached (generation {})", index + 1, generation);

        let task = clear_task(Rc::downgrade(cell), generation);
        let handle = inner.scheduler.schedule(inner.clear_delay_ms, task);
        // Replacing the handle cancels the previous clear.
        inner.pending_clear = Some(handle);

        (inner.state, inner.on_change.clone())
    };
    on_change(snapshot);
}

fn clear_task<O, S>(weak: Weak<RefCell<Inner<O, S>>>, generation: u64) -> Box<dyn FnOnce()>
where
    O: VisibilityObserver + 'static,
    S: Scheduler + 'static,
{
    Box::new(move || {
        let Some(cell) = weak.upgrade() else {
            return;
        };
        let (snapshot, on_change) = {
            let mut inner = cell.borrow_mut();
            if inner.torn_down {
                return;
            }
            // The handle for this task stays in `pending_clear` until it is
            // replaced or torn down; dropping it here would free the running
            // timer closure.
            if !inner.state.clear_highlight(generation) {
                log::debug!("Ignoring stale highlight clear (generation {})", generation);
                return;
            }
            log::debug!("Highlight cleared (generation {})", generation);
            (inner.state, inner.on_change.clone())
        };
        on_change(snapshot);
    })
}
