use sortlab_core::{Run, RunStatus};
use tracing::debug;

use crate::error::{EngineError, Result};

/// Transition table for the process-wide run lifecycle:
/// `Idle -> Running -> (Completed | Cancelled) -> Idle`.
pub struct RunStateMachine;

impl RunStateMachine {
    pub fn validate_transition(from: &RunStatus, to: &RunStatus) -> Result<()> {
        let allowed = Self::allowed_transitions(from);

        if allowed.contains(to) {
            Ok(())
        } else {
            Err(EngineError::InvalidTransition {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    fn allowed_transitions(from: &RunStatus) -> Vec<RunStatus> {
        match from {
            RunStatus::Idle => vec![RunStatus::Running],
            RunStatus::Running => vec![RunStatus::Completed, RunStatus::Cancelled],
            RunStatus::Completed => vec![RunStatus::Idle],
            RunStatus::Cancelled => vec![RunStatus::Idle],
        }
    }

    pub fn can_transition(from: &RunStatus, to: &RunStatus) -> bool {
        Self::validate_transition(from, to).is_ok()
    }
}

/// Validate and apply a status change on a run record.
pub fn transition(run: &mut Run, to: RunStatus) -> Result<()> {
    RunStateMachine::validate_transition(&run.status, &to)?;

    debug!(
        run_id = %run.id,
        from = %run.status.as_str(),
        to = %to.as_str(),
        "Run status transition"
    );

    match to {
        RunStatus::Running => run.start(),
        RunStatus::Completed => run.complete(),
        RunStatus::Cancelled => run.cancel(),
        RunStatus::Idle => run.status = RunStatus::Idle,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortlab_core::AlgorithmId;

    #[test]
    fn test_valid_transitions() {
        assert!(RunStateMachine::can_transition(
            &RunStatus::Idle,
            &RunStatus::Running
        ));
        assert!(RunStateMachine::can_transition(
            &RunStatus::Running,
            &RunStatus::Completed
        ));
        assert!(RunStateMachine::can_transition(
            &RunStatus::Running,
            &RunStatus::Cancelled
        ));
        assert!(RunStateMachine::can_transition(
            &RunStatus::Cancelled,
            &RunStatus::Idle
        ));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!RunStateMachine::can_transition(
            &RunStatus::Idle,
            &RunStatus::Completed
        ));
        assert!(!RunStateMachine::can_transition(
            &RunStatus::Completed,
            &RunStatus::Running
        ));
        assert!(!RunStateMachine::can_transition(
            &RunStatus::Running,
            &RunStatus::Idle
        ));
    }

    #[test]
    fn test_transition_applies_lifecycle() {
        let mut run = Run::new(AlgorithmId::Bubble, 4);

        transition(&mut run, RunStatus::Running).unwrap();
        assert_eq!(run.status, RunStatus::Running);
        assert!(run.started_at.is_some());

        transition(&mut run, RunStatus::Cancelled).unwrap();
        assert_eq!(run.status, RunStatus::Cancelled);
        assert!(run.completed_at.is_some());
    }

    #[test]
    fn test_transition_rejects_skip() {
        let mut run = Run::new(AlgorithmId::Bubble, 4);
        let err = transition(&mut run, RunStatus::Completed).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTransition { .. }));
        assert_eq!(run.status, RunStatus::Idle);
    }
}
