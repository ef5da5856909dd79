//! Registration stepper
//!
//! Position state for the sign-up flow. Deliberately a plain clamped step
//! counter; validation and the step content live with the forms.

use smallvec::SmallVec;

/// The registration flow's step labels, in order
pub const REGISTRATION_STEPS: [&str; 4] = ["Account", "Profile", "Membership", "Confirm"];

/// Step position state for the registration flow
#[derive(Clone, Debug)]
pub struct RegistrationStepper {
    steps: SmallVec<[&'static str; 4]>,
    current: usize,
}

impl RegistrationStepper {
    /// Create a stepper over the standard registration steps
    pub fn new() -> Self {
        Self::with_steps(&REGISTRATION_STEPS)
    }

    /// Create a stepper over a custom step list
    ///
    /// An empty list degrades to the standard steps.
    pub fn with_steps(steps: &[&'static str]) -> Self {
        let steps: SmallVec<[&'static str; 4]> = if steps.is_empty() {
            SmallVec::from_slice(&REGISTRATION_STEPS)
        } else {
            SmallVec::from_slice(steps)
        };
        Self { steps, current: 0 }
    }

    pub fn steps(&self) -> &[&'static str] {
        &self.steps
    }

    /// Zero-based index of the current step
    pub fn current(&self) -> usize {
        self.current
    }

    /// Label of the current step
    pub fn current_label(&self) -> &'static str {
        self.steps[self.current]
    }

    /// Advance one step; clamps at the final step
    pub fn next(&mut self) {
        self.jump(self.current + 1);
    }

    /// Go back one step; clamps at the first step
    pub fn back(&mut self) {
        self.jump(self.current.saturating_sub(1));
    }

    /// Jump to a step by index; out-of-range indices clamp
    pub fn jump(&mut self, step: usize) {
        self.current = step.min(self.steps.len() - 1);
    }

    /// Fraction of the flow completed, 0.0 at the first step, 1.0 at the last
    pub fn progress(&self) -> f32 {
        if self.steps.len() <= 1 {
            return 1.0;
        }
        self.current as f32 / (self.steps.len() - 1) as f32
    }

    /// Whether the final step has been reached
    pub fn is_complete(&self) -> bool {
        self.current == self.steps.len() - 1
    }
}

impl Default for RegistrationStepper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let stepper = RegistrationStepper::new();
        assert_eq!(stepper.current(), 0);
        assert_eq!(stepper.current_label(), "Account");
        assert_eq!(stepper.progress(), 0.0);
        assert!(!stepper.is_complete());
    }

    #[test]
    fn test_next_and_back_clamp() {
        let mut stepper = RegistrationStepper::new();

        stepper.back();
        assert_eq!(stepper.current(), 0);

        for _ in 0..10 {
            stepper.next();
        }
        assert_eq!(stepper.current(), 3);
        assert!(stepper.is_complete());
        assert_eq!(stepper.progress(), 1.0);
    }

    #[test]
    fn test_jump_clamps_out_of_range() {
        let mut stepper = RegistrationStepper::new();
        stepper.jump(99);
        assert_eq!(stepper.current(), 3);
        stepper.jump(1);
        assert_eq!(stepper.current_label(), "Profile");
    }

    #[test]
    fn test_progress_is_linear_in_steps() {
        let mut stepper = RegistrationStepper::new();
        stepper.next();
        assert!((stepper.progress() - 1.0 / 3.0).abs() < 1e-6);
        stepper.next();
        assert!((stepper.progress() - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_step_flow_is_complete() {
        let stepper = RegistrationStepper::with_steps(&["Done"]);
        assert_eq!(stepper.progress(), 1.0);
        assert!(stepper.is_complete());
    }

    #[test]
    fn test_empty_step_list_uses_standard_steps() {
        let stepper = RegistrationStepper::with_steps(&[]);
        assert_eq!(stepper.steps(), &REGISTRATION_STEPS);
    }
}
