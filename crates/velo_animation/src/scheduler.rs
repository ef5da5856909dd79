//! Count-up scheduler
//!
//! Owns all active count-up runs and steps them on each frame. Runs are
//! implicitly registered when created through the [`CountUp`] wrapper and
//! removed when the wrapper retargets or is dropped. A removed run can never
//! be stepped again, which is the whole cancellation discipline: at most one
//! registered run exists per wrapper at any time.
//!
//! [`CountUp`]: crate::count_up::CountUp

use crate::count_up::CountUpRun;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered count-up run
    pub struct RunId;
}

/// Internal state of the count-up scheduler
struct SchedulerInner {
    runs: SlotMap<RunId, CountUpRun>,
    /// Frame clock in milliseconds, handed to runs as their frame timestamp
    clock_ms: f64,
    last_frame: Instant,
}

/// The scheduler that steps all active count-up runs
///
/// Typically held by the application shell and shared via [`SchedulerHandle`].
/// Call [`tick`](Self::tick) once per display frame, or
/// [`advance`](Self::advance) with an explicit delta when the embedder owns
/// the frame loop.
pub struct CountScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl CountScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                runs: SlotMap::with_key(),
                clock_ms: 0.0,
                last_frame: Instant::now(),
            })),
        }
    }

    /// Step all runs using wall-clock time since the previous tick
    ///
    /// Returns true if any run is still animating (needs another tick).
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f64() * 1000.0;
            inner.last_frame = now;
            dt
        };
        self.advance(dt_ms)
    }

    /// Advance the frame clock by `dt_ms` and step all runs
    ///
    /// Returns true if any run is still animating.
    pub fn advance(&self, dt_ms: f64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.clock_ms += dt_ms;
        let now_ms = inner.clock_ms;

        for (_, run) in inner.runs.iter_mut() {
            run.frame(now_ms);
        }

        // Completed runs stay registered so their final value remains
        // readable; they are removed when the wrapper retargets or drops.
        inner.runs.iter().any(|(_, r)| r.is_running())
    }

    /// Check if any runs are still animating
    pub fn has_active_runs(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .runs
            .iter()
            .any(|(_, r)| r.is_running())
    }

    /// Number of registered runs (animating or settled)
    pub fn run_count(&self) -> usize {
        self.inner.lock().unwrap().runs.len()
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Default for CountScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the count-up scheduler
///
/// Passed to components that register runs. It won't keep the scheduler
/// alive; every operation no-ops once the scheduler is dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a run and return its ID
    ///
    /// The shared frame clock is left alone: the new run captures its origin
    /// on its own first frame, and other in-flight runs keep their wall-clock
    /// timing.
    pub fn register(&self, run: CountUpRun) -> Option<RunId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().runs.insert(run))
    }

    /// Remove a run
    ///
    /// After removal the run will never be stepped again; this is how a
    /// superseded or torn-down run is cancelled.
    pub fn remove(&self, id: RunId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().runs.remove(id);
        }
    }

    /// Current value of a run
    pub fn value(&self, id: RunId) -> Option<i64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().runs.get(id).map(|r| r.value()))
    }

    /// Check whether a run is still animating
    ///
    /// Returns false if the run has completed, was removed, or the scheduler
    /// is gone.
    pub fn is_running(&self, id: RunId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().runs.get(id).map(|r| r.is_running()))
            .unwrap_or(false)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
