use sortlab_core::Step;

use crate::context::{RunContext, StepResult};

/// Bubble sort with the no-swap early exit. After each pass the last
/// unsorted index is final and is marked sorted; a pass without swaps
/// ends the run, and the full sorted set is emitted once at the end.
pub(crate) fn sort(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    let mut sorted: Vec<usize> = Vec::new();
    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            ctx.emit(
                values,
                Step::comparing(vec![j, j + 1]).with_sorted(sorted.clone()),
            )?;

            if values[j] > values[j + 1] {
                ctx.emit(
                    values,
                    Step::swapping(vec![j, j + 1]).with_sorted(sorted.clone()),
                )?;
                values.swap(j, j + 1);
                swapped = true;
                ctx.emit(
                    values,
                    Step::swapping(vec![j, j + 1]).with_sorted(sorted.clone()),
                )?;
            }
        }

        sorted.push(n - 1 - i);
        ctx.emit(values, Step::sorted(sorted.clone()))?;

        if !swapped {
            break;
        }
    }

    ctx.emit(values, Step::sorted((0..n).collect()))?;
    Ok(())
}
