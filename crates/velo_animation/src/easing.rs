//! Easing curves
//!
//! The count-up display uses a fixed quartic ease-out: fast start, slow
//! settle. `Linear` exists for tests and for callers that want raw progress.

/// Easing function applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Identity - eased value equals progress
    Linear,
    /// Quartic ease-out: `1 - (1 - t)^4`
    #[default]
    QuartOut,
}

impl Easing {
    /// Apply the curve to a progress value in `[0, 1]`
    ///
    /// Both curves map 0 to 0 and 1 to exactly 1, so a run that clamps its
    /// final progress to 1 lands exactly on its target.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}
