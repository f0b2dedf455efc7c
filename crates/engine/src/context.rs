//! Step emission protocol shared by all engines.
//!
//! A [`RunContext`] wraps a [`StepSink`] and a [`CancelFlag`]. Calling
//! [`RunContext::emit`] is an engine's suspension point: the cancellation
//! flag is checked immediately before the frame leaves the engine, and a
//! set flag turns into the [`Cancelled`] signal, which engines propagate
//! with `?` out of every loop and recursive call.

use events::{Frame, StepPhase};
use sortlab_core::Step;

use crate::cancel::CancelFlag;

/// Signal that a run was cancelled at a suspension point.
///
/// Not an error: it is the normal early-termination path. Engines return
/// `Result<_, Cancelled>` so the signal unwinds recursion via `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

pub type StepResult<T = ()> = std::result::Result<T, Cancelled>;

/// Consumer of the frames an engine emits.
///
/// Implementations must preserve arrival order. A sink that can no longer
/// deliver frames should request cancellation on the run's [`CancelFlag`]
/// rather than fail the engine directly.
pub trait StepSink {
    fn accept(&mut self, frame: Frame);
}

/// Per-run emission state threaded through an engine.
pub struct RunContext<'a> {
    sink: &'a mut dyn StepSink,
    cancel: CancelFlag,
    phase: StepPhase,
    seq: u64,
}

impl<'a> RunContext<'a> {
    pub fn new(sink: &'a mut dyn StepSink, cancel: CancelFlag) -> Self {
        Self {
            sink,
            cancel,
            phase: StepPhase::Sorting,
            seq: 0,
        }
    }

    /// Cancellation check without an emission. Used at recursion
    /// boundaries, where an engine must stop even though it has nothing
    /// new to show.
    pub fn checkpoint(&self) -> StepResult {
        if self.cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Emit one frame: checkpoint, snapshot the array, hand the frame to
    /// the sink. Every emission is a suspension point.
    pub fn emit(&mut self, values: &[u32], step: Step) -> StepResult {
        self.checkpoint()?;
        debug_assert!(
            step.in_bounds(values.len()),
            "step indices out of bounds for array of length {}",
            values.len()
        );
        let frame = Frame {
            seq: self.seq,
            phase: self.phase,
            values: values.to_vec(),
            step,
        };
        self.seq += 1;
        self.sink.accept(frame);
        Ok(())
    }

    /// Switch subsequent emissions to the finalize sweep.
    pub(crate) fn enter_finalize(&mut self) {
        self.phase = StepPhase::Finalize;
    }

    /// Number of frames emitted so far.
    pub fn frames_emitted(&self) -> u64 {
        self.seq
    }
}

/// Sink that collects every frame in order. The workhorse of the engine
/// tests; also useful for headless step-sequence inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    pub frames: Vec<Frame>,
}

impl StepSink for VecSink {
    fn accept(&mut self, frame: Frame) {
        self.frames.push(frame);
    }
}

/// Sink that requests cancellation once a fixed number of frames has been
/// accepted. Lets tests interrupt a run at an arbitrary suspension point
/// deterministically, including deep inside merge/quicksort recursion.
#[derive(Debug)]
pub struct CancelAfter {
    pub frames: Vec<Frame>,
    flag: CancelFlag,
    remaining: usize,
}

impl CancelAfter {
    pub fn new(flag: CancelFlag, after: usize) -> Self {
        Self {
            frames: Vec::new(),
            flag,
            remaining: after,
        }
    }
}

impl StepSink for CancelAfter {
    fn accept(&mut self, frame: Frame) {
        self.frames.push(frame);
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.flag.cancel();
            }
        }
    }
}
