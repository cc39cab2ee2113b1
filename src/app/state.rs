use crate::upload::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Session state for one classification cycle. Only the controller mutates
/// it; fields are read through accessors so `result` and `error_message` can
/// never be set together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    phase: Phase,
    result: Option<Classification>,
    error_message: Option<String>,
}

impl UploadState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&Classification> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub(super) fn begin_submit(&mut self) {
        self.phase = Phase::Submitting;
        self.result = None;
        self.error_message = None;
    }

    pub(super) fn succeed(&mut self, result: Classification) {
        self.phase = Phase::Succeeded;
        self.result = Some(result);
        self.error_message = None;
    }

    pub(super) fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed;
        self.result = None;
        self.error_message = Some(message.into());
    }

    pub(super) fn clear(&mut self) {
        *self = UploadState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::Label;

    fn cat() -> Classification {
        Classification {
            label: Label::Cat,
            confidence: 97.4,
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = UploadState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.result().is_none());
        assert!(state.error_message().is_none());
    }

    #[test]
    fn submit_clears_previous_outcome() {
        let mut state = UploadState::default();
        state.succeed(cat());
        state.begin_submit();
        assert_eq!(state.phase(), Phase::Submitting);
        assert!(state.result().is_none());

        state.fail("model unavailable");
        state.begin_submit();
        assert!(state.error_message().is_none());
    }

    #[test]
    fn outcomes_are_mutually_exclusive() {
        let mut state = UploadState::default();
        state.fail("boom");
        state.succeed(cat());
        assert!(state.error_message().is_none());
        assert_eq!(state.result(), Some(&cat()));

        state.fail("boom");
        assert!(state.result().is_none());
        assert_eq!(state.error_message(), Some("boom"));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut state = UploadState::default();
        state.succeed(cat());
        state.clear();
        assert_eq!(state, UploadState::default());
    }
}
