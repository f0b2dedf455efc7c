//! Presenter interface and the pacing driver.
//!
//! The core never renders and never sleeps on its own: a [`Presenter`]
//! receives each frame in strict emission order, and [`drive`] performs
//! the configured delay between frames on its behalf.

use std::time::Duration;

use async_trait::async_trait;
use events::{Frame, RunEvent, StepPhase};
use sortlab_core::{Run, RunOutcome};

use crate::error::Result;
use crate::runner::RunHandle;

/// Finalize frames sweep quickly regardless of the configured delay.
const FINALIZE_CAP: Duration = Duration::from_millis(20);

/// Consumer of a run's frames. Rendering and timing live behind this
/// trait; the engines know nothing about either.
#[async_trait]
pub trait Presenter: Send {
    /// Render one frame. Called in emission order, never concurrently.
    async fn frame(&mut self, frame: &Frame);

    /// Called once, after the stream has ended.
    async fn finished(&mut self, outcome: RunOutcome);
}

/// Pacing for one frame: the configured delay for sorting frames, and
/// the faster `min(20ms, delay / 5)` sweep for finalize frames.
pub fn frame_delay(phase: StepPhase, delay: Duration) -> Duration {
    match phase {
        StepPhase::Sorting => delay,
        StepPhase::Finalize => FINALIZE_CAP.min(delay / 5),
    }
}

/// Pull a run's events to the end, handing each frame to `presenter` and
/// sleeping the pacing delay between frames. Returns the final array,
/// the outcome, and the run record.
pub async fn drive<P: Presenter>(
    mut handle: RunHandle,
    presenter: &mut P,
) -> Result<(Vec<u32>, RunOutcome, Run)> {
    let delay = Duration::from_millis(handle.config.delay_ms);

    while let Some(event) = handle.next_event().await {
        match event {
            RunEvent::RunStep { frame, .. } => {
                presenter.frame(&frame).await;
                let pace = frame_delay(frame.phase, delay);
                if !pace.is_zero() {
                    tokio::time::sleep(pace).await;
                }
            }
            RunEvent::RunStarted { .. } => {}
            RunEvent::RunCompleted { .. } | RunEvent::RunCancelled { .. } => break,
            RunEvent::Error { .. } => break,
        }
    }

    let (values, outcome, run) = handle.join().await?;
    presenter.finished(outcome).await;
    Ok((values, outcome, run))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::SortRunner;
    use sortlab_core::{AlgorithmId, RunConfig};

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<Frame>,
        outcome: Option<RunOutcome>,
    }

    #[async_trait]
    impl Presenter for RecordingPresenter {
        async fn frame(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }

        async fn finished(&mut self, outcome: RunOutcome) {
            self.outcome = Some(outcome);
        }
    }

    #[test]
    fn test_frame_delay_pacing() {
        let delay = Duration::from_millis(200);
        assert_eq!(frame_delay(StepPhase::Sorting, delay), delay);
        assert_eq!(
            frame_delay(StepPhase::Finalize, delay),
            Duration::from_millis(20)
        );

        // below the cap the sweep tracks delay / 5
        let short = Duration::from_millis(50);
        assert_eq!(
            frame_delay(StepPhase::Finalize, short),
            Duration::from_millis(10)
        );
    }

    #[tokio::test]
    async fn test_drive_delivers_every_frame_in_order() {
        let runner = SortRunner::new();
        let handle = runner
            .start(vec![30, 10, 20], RunConfig::new(AlgorithmId::Bubble, 0))
            .unwrap();

        let mut presenter = RecordingPresenter::default();
        let (values, outcome, _) = drive(handle, &mut presenter).await.unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(presenter.outcome, Some(RunOutcome::Completed));
        assert_eq!(values, vec![10, 20, 30]);

        for (i, frame) in presenter.frames.iter().enumerate() {
            assert_eq!(frame.seq, i as u64);
        }
        // the last frames are the finalize sweep
        assert_eq!(
            presenter.frames.last().unwrap().phase,
            StepPhase::Finalize
        );
    }

    #[tokio::test]
    async fn test_drive_reports_cancellation() {
        let runner = SortRunner::new().with_channel_capacity(1);
        let handle = runner
            .start(
                vec![90, 45, 180, 45, 12, 300, 77, 203],
                RunConfig::new(AlgorithmId::Quick, 0),
            )
            .unwrap();
        handle.cancel();

        let mut presenter = RecordingPresenter::default();
        let (values, outcome, _) = drive(handle, &mut presenter).await.unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(presenter.outcome, Some(RunOutcome::Cancelled));
        assert_eq!(values.len(), 8);
        // no finalize frames after a cancellation
        assert!(presenter
            .frames
            .iter()
            .all(|f| f.phase == StepPhase::Sorting));
    }
}
