//! Event types for the Sortlab run stream

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortlab_core::{AlgorithmId, Step};
use uuid::Uuid;

/// Which part of a run a frame belongs to.
///
/// Finalize frames form the synthetic all-sorted sweep appended after
/// natural completion; renderers pace them faster than sorting frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepPhase {
    Sorting,
    Finalize,
}

/// One renderable moment of a run: a step descriptor plus the working
/// array contents it was emitted against.
///
/// `seq` is strictly increasing within a run; consumers must render
/// frames in `seq` order without dropping any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frame {
    pub seq: u64,
    pub phase: StepPhase,
    pub values: Vec<u32>,
    pub step: Step,
}

/// Envelope wrapping all events with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: RunEvent,
}

impl EventEnvelope {
    /// Create a new event envelope with auto-generated ID and timestamp
    pub fn new(event: RunEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// All events a run can produce, in emission order: one `run.started`,
/// any number of `run.step`, then a single terminal event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEvent {
    /// A run began; frames for `run_id` follow.
    #[serde(rename = "run.started")]
    RunStarted {
        run_id: Uuid,
        algorithm: AlgorithmId,
        size: usize,
    },

    /// One step of the run, with the array snapshot to render.
    #[serde(rename = "run.step")]
    RunStep { run_id: Uuid, frame: Frame },

    /// The run finished naturally (after its finalize sweep).
    #[serde(rename = "run.completed")]
    RunCompleted { run_id: Uuid },

    /// The run was cancelled at a suspension point.
    #[serde(rename = "run.cancelled")]
    RunCancelled { run_id: Uuid },

    /// Generic error event
    #[serde(rename = "error")]
    Error {
        message: String,
        context: Option<String>,
    },
}

impl RunEvent {
    /// Get the run ID associated with this event, if any
    pub fn run_id(&self) -> Option<Uuid> {
        match self {
            RunEvent::RunStarted { run_id, .. } => Some(*run_id),
            RunEvent::RunStep { run_id, .. } => Some(*run_id),
            RunEvent::RunCompleted { run_id } => Some(*run_id),
            RunEvent::RunCancelled { run_id } => Some(*run_id),
            RunEvent::Error { .. } => None,
        }
    }

    /// True for `run.completed` and `run.cancelled`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunEvent::RunCompleted { .. } | RunEvent::RunCancelled { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortlab_core::window;

    fn sample_frame(seq: u64) -> Frame {
        Frame {
            seq,
            phase: StepPhase::Sorting,
            values: vec![30, 10, 20],
            step: Step::comparing(vec![0, 1]).with_partition(window(0, 2)),
        }
    }

    #[test]
    fn test_event_envelope_creation() {
        let event = RunEvent::RunStarted {
            run_id: Uuid::new_v4(),
            algorithm: AlgorithmId::Bubble,
            size: 3,
        };
        let envelope = EventEnvelope::new(event);

        assert!(!envelope.id.is_nil());
        assert!(envelope.timestamp <= Utc::now());
    }

    #[test]
    fn test_event_serialization() {
        let event = RunEvent::RunStep {
            run_id: Uuid::new_v4(),
            frame: sample_frame(7),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("run.step"));
        assert!(json.contains("\"seq\":7"));
        assert!(json.contains("comparing"));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"type":"run.started","run_id":"550e8400-e29b-41d4-a716-446655440000","algorithm":"merge","size":16}"#;
        let event: RunEvent = serde_json::from_str(json).unwrap();

        match event {
            RunEvent::RunStarted {
                algorithm, size, ..
            } => {
                assert_eq!(algorithm, AlgorithmId::Merge);
                assert_eq!(size, 16);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn test_event_run_id() {
        let run_id = Uuid::new_v4();

        let event = RunEvent::RunCompleted { run_id };
        assert_eq!(event.run_id(), Some(run_id));
        assert!(event.is_terminal());

        let error_event = RunEvent::Error {
            message: "test".to_string(),
            context: None,
        };
        assert_eq!(error_event.run_id(), None);
        assert!(!error_event.is_terminal());
    }

    #[test]
    fn test_frame_round_trip() {
        let frame = sample_frame(0);
        let json = serde_json::to_string(&frame).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }
}
