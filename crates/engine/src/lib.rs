//! Instrumented sorting engine for Sortlab
//!
//! Five classic comparison sorts rewritten as suspension-point-driven
//! state machines: every comparison, swap, and write emits a frame, and a
//! cooperative cancellation token can interrupt a run at any emission
//! point, including between recursive calls in merge and quicksort.
//!
//! The engines themselves are synchronous and sink-driven; the
//! [`runner::SortRunner`] bridges them onto a bounded async channel so a
//! Presenter can pull frames in strict emission order and pace them.

mod algorithms;

pub mod cancel;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod presenter;
pub mod runner;
pub mod state;

pub use cancel::CancelFlag;
pub use context::{CancelAfter, Cancelled, RunContext, StepResult, StepSink, VecSink};
pub use error::{EngineError, Result};
pub use orchestrator::execute;
pub use presenter::{drive, frame_delay, Presenter};
pub use runner::{RunHandle, SortRunner};
pub use state::RunStateMachine;
