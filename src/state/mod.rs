//! Per-form submission state
//!
//! Every form owns one `SubmitState`. A submission may only begin when no
//! request is in flight; the resolving transition runs on every exit path,
//! so a stuck `Submitting` state is unrepresentable as long as callers pair
//! `begin` with `resolve` or `reject`.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    /// Try to start a submission. Refused while a request is in flight;
    /// permitted from `Idle` and from both terminal states.
    pub fn begin(&mut self) -> bool {
        if *self == SubmitState::Submitting {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// The in-flight request completed successfully.
    pub fn resolve(&mut self) {
        if *self == SubmitState::Submitting {
            *self = SubmitState::Succeeded;
        }
    }

    /// The in-flight request failed.
    pub fn reject(&mut self) {
        if *self == SubmitState::Submitting {
            *self = SubmitState::Failed;
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_from_idle() {
        let mut state = SubmitState::default();
        assert_eq!(state, SubmitState::Idle);
        assert!(state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_begin_refused_while_submitting() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state, SubmitState::Submitting);
    }

    #[test]
    fn test_resolve_and_reject_reach_terminal_states() {
        let mut state = SubmitState::default();
        state.begin();
        state.resolve();
        assert_eq!(state, SubmitState::Succeeded);

        let mut state = SubmitState::default();
        state.begin();
        state.reject();
        assert_eq!(state, SubmitState::Failed);
    }

    #[test]
    fn test_next_attempt_allowed_from_both_terminal_states() {
        for terminal in [SubmitState::Succeeded, SubmitState::Failed] {
            let mut state = terminal;
            assert!(state.begin());
            assert!(state.is_submitting());
        }
    }

    #[test]
    fn test_resolve_and_reject_ignored_outside_submitting() {
        for state in [SubmitState::Idle, SubmitState::Succeeded, SubmitState::Failed] {
            let mut resolved = state;
            resolved.resolve();
            assert_eq!(resolved, state);

            let mut rejected = state;
            rejected.reject();
            assert_eq!(rejected, state);
        }
    }
}
