//! Selects and drives one engine for a run, and appends the finalize
//! sweep on natural completion.

use sortlab_core::{AlgorithmId, RunOutcome, Step};
use tracing::debug;

use crate::algorithms;
use crate::context::{Cancelled, RunContext, StepResult};

/// Run `algorithm` over `values` in place, emitting every step through
/// `ctx`.
///
/// On natural completion the finalize sweep follows: one frame per index
/// transitioning to sorted, in index order, tagged with the finalize
/// phase so renderers pace it faster. A cancelled run gets no sweep and
/// reports `Cancelled` immediately.
pub fn execute(values: &mut [u32], algorithm: AlgorithmId, ctx: &mut RunContext<'_>) -> RunOutcome {
    debug!(algorithm = %algorithm, len = values.len(), "Engine starting");

    let outcome = match run_engine(values, algorithm, ctx) {
        Ok(()) => match finalize(values, ctx) {
            Ok(()) => RunOutcome::Completed,
            Err(Cancelled) => RunOutcome::Cancelled,
        },
        Err(Cancelled) => RunOutcome::Cancelled,
    };

    debug!(
        algorithm = %algorithm,
        outcome = ?outcome,
        frames = ctx.frames_emitted(),
        "Engine finished"
    );
    outcome
}

fn run_engine(values: &mut [u32], algorithm: AlgorithmId, ctx: &mut RunContext<'_>) -> StepResult {
    match algorithm {
        AlgorithmId::Bubble => algorithms::bubble::sort(values, ctx),
        AlgorithmId::Selection => algorithms::selection::sort(values, ctx),
        AlgorithmId::Insertion => algorithms::insertion::sort(values, ctx),
        AlgorithmId::Merge => algorithms::merge::sort(values, ctx),
        AlgorithmId::Quick => algorithms::quick::sort(values, ctx),
    }
}

fn finalize(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    ctx.enter_finalize();
    for i in 0..values.len() {
        ctx.emit(values, Step::sorted((0..=i).collect()))?;
    }
    Ok(())
}
