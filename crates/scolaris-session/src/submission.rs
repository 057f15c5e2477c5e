//! Deferred form submission.
//!
//! Login and the demo one-click buttons complete asynchronously; the UI
//! needs a pending flag to disable controls and a way to discard a result
//! that arrives after the user navigated away. [`Submission`] models that
//! lifecycle without owning a runtime: the host drives it by calling
//! [`Submission::resolve`] or [`Submission::fail`] when its own async
//! machinery completes.

/// Message shown when a deferred operation exceeds the host's deadline.
pub const TIMEOUT_MESSAGE: &str = "La requête a expiré. Veuillez réessayer.";

/// Lifecycle of one deferred operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState<T> {
    /// Nothing in flight.
    Idle,
    /// Started, awaiting completion.
    Pending,
    /// Completed successfully.
    Resolved(T),
    /// Completed with a user-facing error message.
    Failed(String),
}

/// A restartable deferred operation slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<T> {
    state: SubmissionState<T>,
}

impl<T> Default for Submission<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Submission<T> {
    /// New idle slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    /// Mark the operation started. Clears any previous outcome.
    pub fn start(&mut self) {
        self.state = SubmissionState::Pending;
    }

    /// Complete successfully. Ignored unless pending, so a stale
    /// completion arriving after [`Submission::cancel`] has no effect.
    pub fn resolve(&mut self, value: T) {
        if matches!(self.state, SubmissionState::Pending) {
            self.state = SubmissionState::Resolved(value);
        }
    }

    /// Complete with an error message. Ignored unless pending.
    pub fn fail(&mut self, message: impl Into<String>) {
        if matches!(self.state, SubmissionState::Pending) {
            self.state = SubmissionState::Failed(message.into());
        }
    }

    /// Abandon an in-flight operation, returning to idle.
    pub fn cancel(&mut self) {
        if matches!(self.state, SubmissionState::Pending) {
            self.state = SubmissionState::Idle;
        }
    }

    /// Expire an in-flight operation. The host calls this when its own
    /// deadline elapses; the slot carries no timer of its own.
    pub fn time_out(&mut self) {
        self.fail(TIMEOUT_MESSAGE);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState<T> {
        &self.state
    }

    /// True while awaiting completion; the UI disables its controls.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending)
    }

    /// Error message from a failed completion, if that is where we are.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Take a successful outcome, resetting the slot to idle.
    pub fn take_result(&mut self) -> Option<T> {
        if matches!(self.state, SubmissionState::Resolved(_)) {
            match std::mem::replace(&mut self.state, SubmissionState::Idle) {
                SubmissionState::Resolved(value) => Some(value),
                _ => unreachable!(),
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let submission: Submission<u32> = Submission::new();
        assert_eq!(*submission.state(), SubmissionState::Idle);
        assert!(!submission.is_pending());
    }

    #[test]
    fn test_start_resolve_take() {
        let mut submission = Submission::new();
        submission.start();
        assert!(submission.is_pending());
        submission.resolve(7u32);
        assert_eq!(submission.take_result(), Some(7));
        assert_eq!(*submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_fail_exposes_message() {
        let mut submission: Submission<u32> = Submission::new();
        submission.start();
        submission.fail("Compte de démo introuvable.");
        assert_eq!(submission.error(), Some("Compte de démo introuvable."));
        assert_eq!(submission.take_result(), None);
    }

    #[test]
    fn test_resolve_after_cancel_is_discarded() {
        let mut submission = Submission::new();
        submission.start();
        submission.cancel();
        submission.resolve(7u32);
        assert_eq!(*submission.state(), SubmissionState::Idle);
        assert_eq!(submission.take_result(), None);
    }

    #[test]
    fn test_resolve_without_start_is_ignored() {
        let mut submission = Submission::new();
        submission.resolve(7u32);
        assert_eq!(*submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_time_out_fails_with_timeout_message() {
        let mut submission: Submission<u32> = Submission::new();
        submission.start();
        submission.time_out();
        assert_eq!(submission.error(), Some(TIMEOUT_MESSAGE));
        // A result arriving after the deadline is discarded.
        submission.resolve(7);
        assert_eq!(submission.take_result(), None);
    }

    #[test]
    fn test_time_out_ignored_when_not_pending() {
        let mut submission: Submission<u32> = Submission::new();
        submission.time_out();
        assert_eq!(*submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_restart_clears_previous_failure() {
        let mut submission: Submission<u32> = Submission::new();
        submission.start();
        submission.fail("nope");
        submission.start();
        assert!(submission.is_pending());
        assert_eq!(submission.error(), None);
    }
}
