//! Veloclub Animation
//!
//! Frame-driven numeric count-up animations for the club dashboard.
//!
//! # Features
//!
//! - **Count-Up Runs**: Eased value ramps from a start value to a target
//! - **Scheduler**: Central frame clock that ticks all active runs
//! - **Interruptible**: Retargeting cancels the prior run before the new one starts
//! - **Deterministic Ticking**: `advance(dt_ms)` for embedders and tests that own the frame loop

pub mod count_up;
pub mod easing;
pub mod scheduler;

pub use count_up::{CountUp, CountUpRun};
pub use easing::Easing;
pub use scheduler::{CountScheduler, RunId, SchedulerHandle};
