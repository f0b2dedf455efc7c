//! Async facade over the synchronous engines.
//!
//! A [`SortRunner`] owns the process-wide active-run slot and starts runs
//! in the background. Frames travel over a bounded mpsc channel: every
//! frame is delivered, in emission order, and `blocking_send` suspends
//! the engine whenever the consumer is still busy with earlier frames.
//! That backpressure is the suspension mechanism that lets the Presenter
//! pace the animation.

use std::sync::{Arc, Mutex};

use events::{EventBus, Frame, RunEvent};
use sortlab_core::{Run, RunConfig, RunOutcome, RunStatus};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cancel::CancelFlag;
use crate::context::{RunContext, StepSink};
use crate::error::{EngineError, Result};
use crate::orchestrator;
use crate::state;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Sink that forwards frames into the run's bounded channel.
///
/// A closed channel means the consumer went away; that is treated as a
/// cancellation request so the engine unwinds at its next checkpoint.
struct ChannelSink {
    run_id: Uuid,
    tx: mpsc::Sender<RunEvent>,
    cancel: CancelFlag,
}

impl StepSink for ChannelSink {
    fn accept(&mut self, frame: Frame) {
        let event = RunEvent::RunStep {
            run_id: self.run_id,
            frame,
        };
        if self.tx.blocking_send(event).is_err() {
            self.cancel.cancel();
        }
    }
}

/// Starts sort runs and enforces the one-active-run invariant.
pub struct SortRunner {
    active: Arc<Mutex<Option<Uuid>>>,
    event_bus: Option<EventBus>,
    channel_capacity: usize,
}

impl SortRunner {
    pub fn new() -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            event_bus: None,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Mirror lifecycle events onto a broadcast bus for observers.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// Whether a run is currently active.
    pub fn is_active(&self) -> bool {
        self.active.lock().expect("active-run slot poisoned").is_some()
    }

    /// Begin a run over `values`. The engine starts immediately in the
    /// background; the returned handle yields the event stream.
    ///
    /// Returns [`EngineError::RunActive`] while another run holds the
    /// slot — reconfiguring or restarting mid-run is rejected here, never
    /// inside an engine.
    pub fn start(&self, values: Vec<u32>, config: RunConfig) -> Result<RunHandle> {
        let mut run = Run::new(config.algorithm, values.len());
        state::transition(&mut run, RunStatus::Running)?;

        {
            let mut slot = self.active.lock().expect("active-run slot poisoned");
            if slot.is_some() {
                return Err(EngineError::RunActive);
            }
            *slot = Some(run.id);
        }

        let run_id = run.id;
        let cancel = CancelFlag::new();
        let (tx, rx) = mpsc::channel(self.channel_capacity);

        let started = RunEvent::RunStarted {
            run_id,
            algorithm: config.algorithm,
            size: run.size,
        };
        if tx.try_send(started.clone()).is_err() {
            *self.active.lock().expect("active-run slot poisoned") = None;
            return Err(EngineError::ChannelClosed);
        }
        if let Some(bus) = &self.event_bus {
            bus.publish(started);
        }

        info!(
            run_id = %run_id,
            algorithm = %config.algorithm,
            size = run.size,
            delay_ms = config.delay_ms,
            "Run started"
        );

        let active = Arc::clone(&self.active);
        let bus = self.event_bus.clone();
        let engine_cancel = cancel.clone();
        let algorithm = config.algorithm;
        let engine_tx = tx.clone();

        let outcome = tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let mut sink = ChannelSink {
                    run_id,
                    tx: engine_tx,
                    cancel: engine_cancel.clone(),
                };
                let mut ctx = RunContext::new(&mut sink, engine_cancel);
                let mut working = values;
                let outcome = orchestrator::execute(&mut working, algorithm, &mut ctx);
                (working, outcome)
            })
            .await;

            let finished = match result {
                Ok((working, outcome)) => match state::transition(&mut run, outcome.status()) {
                    Ok(()) => {
                        let terminal = match outcome {
                            RunOutcome::Completed => RunEvent::RunCompleted { run_id },
                            RunOutcome::Cancelled => RunEvent::RunCancelled { run_id },
                        };
                        // the consumer may already be gone; that is fine
                        let _ = tx.send(terminal.clone()).await;
                        if let Some(bus) = &bus {
                            bus.publish(terminal);
                        }

                        info!(run_id = %run_id, status = %run.status.as_str(), "Run finished");
                        Ok((working, outcome, run))
                    }
                    Err(err) => Err(err),
                },
                Err(err) => {
                    let message = format!("engine task failed: {err}");
                    warn!(run_id = %run_id, error = %message, "Run aborted");
                    if let Some(bus) = &bus {
                        bus.publish(RunEvent::Error {
                            message: message.clone(),
                            context: Some(run_id.to_string()),
                        });
                    }
                    Err(EngineError::ExecutionFailed(message))
                }
            };

            *active.lock().expect("active-run slot poisoned") = None;
            finished
        });

        Ok(RunHandle {
            run_id,
            config,
            events: rx,
            cancel,
            outcome,
        })
    }
}

impl Default for SortRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to an in-flight run: the ordered event stream, the cancellation
/// token, and the final result.
pub struct RunHandle {
    pub run_id: Uuid,
    pub config: RunConfig,
    events: mpsc::Receiver<RunEvent>,
    cancel: CancelFlag,
    outcome: JoinHandle<Result<(Vec<u32>, RunOutcome, Run)>>,
}

impl RunHandle {
    /// Request cooperative cancellation. Takes effect at the engine's
    /// next suspension point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Clone of the run's cancellation token, for wiring into signal
    /// handlers or watchdogs.
    pub fn cancellation(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Next event in strict emission order; `None` once the stream ends.
    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }

    /// Drain any remaining events and wait for the run to settle,
    /// returning the final array, outcome, and run record.
    pub async fn join(mut self) -> Result<(Vec<u32>, RunOutcome, Run)> {
        while self.events.recv().await.is_some() {}
        self.outcome
            .await
            .map_err(|err| EngineError::ExecutionFailed(err.to_string()))?
    }
}
