//! Application state definitions

use super::forms::OnboardingForm;

/// Phase of the submission state machine.
///
/// `Idle -> Validating -> Submitting` within one attempt; the terminal
/// outcomes (rejected, succeeded, failed) all return to `Idle` so the form
/// stays interactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Modal notification reporting the outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

/// Current application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The onboarding form session
    pub form: OnboardingForm,
    /// Where the current submit attempt is in its lifecycle
    pub submit_phase: SubmitPhase,
    /// Monotonic id of the latest submit attempt, used to discard results
    /// arriving for a superseded attempt
    pub submit_attempt: u64,
    /// Pending modal notification, if any
    pub notification: Option<Notification>,
    /// Transient text for the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// True while a validate-and-submit cycle is in flight; the submit
    /// trigger is disabled for the duration
    pub fn is_submitting(&self) -> bool {
        self.submit_phase != SubmitPhase::Idle
    }

    /// Dismiss the modal notification
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = AppState::default();
        assert_eq!(state.submit_phase, SubmitPhase::Idle);
        assert_eq!(state.submit_attempt, 0);
        assert!(state.notification.is_none());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_is_submitting_covers_both_phases() {
        let mut state = AppState::default();
        state.submit_phase = SubmitPhase::Validating;
        assert!(state.is_submitting());
        state.submit_phase = SubmitPhase::Submitting;
        assert!(state.is_submitting());
    }

    #[test]
    fn test_dismiss_notification() {
        let mut state = AppState {
            notification: Some(Notification::Success("ok".to_string())),
            ..Default::default()
        };
        state.dismiss_notification();
        assert!(state.notification.is_none());
    }
}
