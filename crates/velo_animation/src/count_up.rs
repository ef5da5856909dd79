//! Count-up animation
//!
//! Drives an integer display value from a start value to a target over a
//! fixed duration with a quartic ease-out, the effect behind the animated
//! ride/member counters on the club dashboard.

use crate::easing::Easing;
use crate::scheduler::{RunId, SchedulerHandle};

/// Default run length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// A single count-up run
///
/// Plain value type stepped by the scheduler. The origin timestamp is
/// captured on the first frame; progress is measured against it and clamped
/// to `[0, 1]`, so the final applied frame lands exactly on the target
/// (eased progress 1 bypasses the floor's truncation).
#[derive(Clone, Copy, Debug)]
pub struct CountUpRun {
    start: f64,
    target: f64,
    duration_ms: f64,
    /// Frame timestamp of the run's first frame; unset until that frame fires
    origin_ms: Option<f64>,
    value: i64,
    running: bool,
}

impl CountUpRun {
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            target,
            duration_ms,
            origin_ms: None,
            value: start.floor() as i64,
            running: true,
        }
    }

    /// Step the run with the frame timestamp `now_ms`
    pub fn frame(&mut self, now_ms: f64) {
        if !self.running {
            return;
        }

        let origin = *self.origin_ms.get_or_insert(now_ms);

        // A non-positive duration completes on the first frame; guards the
        // division below.
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - origin) / self.duration_ms).clamp(0.0, 1.0)
        };

        let eased = Easing::QuartOut.apply(progress);
        self.value = (self.start + (self.target - self.start) * eased).floor() as i64;

        if progress >= 1.0 {
            self.running = false;
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

/// An animated count that registers its runs with the scheduler
///
/// Retargeting supersedes the current run: the old run is removed from the
/// scheduler *before* the new one is registered, so two runs for the same
/// counter can never be stepped in the same frame. Dropping the wrapper
/// removes any registered run.
///
/// A target of `None` or `0` resets the value to 0 without starting a run
/// and without touching the animating flag.
///
/// # Example
///
/// ```ignore
/// let scheduler = CountScheduler::new();
/// let mut rides = CountUp::new(scheduler.handle()).duration(1000.0);
///
/// rides.set_target(Some(128.0));
/// // each frame:
/// scheduler.tick();
/// let shown = rides.count();
/// ```
pub struct CountUp {
    handle: SchedulerHandle,
    run_id: Option<RunId>,
    target: Option<f64>,
    start: f64,
    duration_ms: f64,
    /// Value reported while no run is registered
    idle_value: i64,
    /// Animating flag reported while no run is registered
    idle_animating: bool,
}

impl CountUp {
    /// Create a counter with default options (start 0, 2000ms duration)
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            handle,
            run_id: None,
            target: None,
            start: 0.0,
            duration_ms: DEFAULT_DURATION_MS,
            idle_value: 0,
            idle_animating: false,
        }
    }

    /// Set the run duration in milliseconds (builder form)
    pub fn duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the value runs begin from (builder form)
    pub fn start_at(mut self, start: f64) -> Self {
        self.start = start;
        self.idle_value = start.floor() as i64;
        self
    }

    /// Retarget the counter
    ///
    /// Any in-flight run is cancelled first. `None` and `0` reset the value
    /// to 0 without scheduling anything.
    pub fn set_target(&mut self, target: Option<f64>) {
        self.target = target;
        self.restart();
    }

    /// Change the duration for subsequent frames, restarting the run
    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
        self.restart();
    }

    /// Change the start value, restarting the run
    pub fn set_start(&mut self, start: f64) {
        self.start = start;
        self.restart();
    }

    /// Cancel the current run and begin a new one for the current options
    fn restart(&mut self) {
        // Cancel before superseding: the old run must be out of the
        // scheduler before the new one registers.
        if let Some(id) = self.run_id.take() {
            self.idle_animating = self.handle.is_running(id);
            self.handle.remove(id);
        }

        match self.target {
            Some(target) if target != 0.0 => {
                let run = CountUpRun::new(self.start, target, self.duration_ms);
                self.run_id = self.handle.register(run);
                if self.run_id.is_none() {
                    // Scheduler gone; report the start value, nothing animates.
                    tracing::debug!("count-up scheduler dropped; run not registered");
                    self.idle_value = self.start.floor() as i64;
                    self.idle_animating = false;
                }
            }
            _ => {
                // Reset to zero; the animating flag is deliberately left as
                // it was (this path never starts or finishes a run).
                self.idle_value = 0;
            }
        }
    }

    /// Current displayed value
    pub fn count(&self) -> i64 {
        match self.run_id {
            Some(id) => self.handle.value(id).unwrap_or(self.idle_value),
            None => self.idle_value,
        }
    }

    /// True from run start until the run completes or is cancelled
    pub fn is_animating(&self) -> bool {
        match self.run_id {
            Some(id) => self.handle.is_running(id),
            None => self.idle_animating,
        }
    }

    /// The current target, if any
    pub fn target(&self) -> Option<f64> {
        self.target
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        if let Some(id) = self.run_id {
            self.handle.remove(id);
        }
    }
}
