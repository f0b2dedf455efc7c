use sortlab_core::Step;

use crate::context::{RunContext, StepResult};

/// Selection sort. The running minimum is kept highlighted between
/// comparisons; each placed prefix index is marked sorted as soon as its
/// pass ends.
pub(crate) fn sort(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    let n = values.len();
    if n < 2 {
        return Ok(());
    }

    let mut sorted: Vec<usize> = Vec::new();
    for i in 0..n - 1 {
        let mut min_index = i;
        ctx.emit(
            values,
            Step::comparing(vec![min_index]).with_sorted(sorted.clone()),
        )?;

        for j in i + 1..n {
            ctx.emit(
                values,
                Step::comparing(vec![min_index, j]).with_sorted(sorted.clone()),
            )?;

            if values[j] < values[min_index] {
                min_index = j;
            }
            ctx.emit(
                values,
                Step::comparing(vec![min_index]).with_sorted(sorted.clone()),
            )?;
        }

        if min_index != i {
            ctx.emit(
                values,
                Step::swapping(vec![i, min_index]).with_sorted(sorted.clone()),
            )?;
            values.swap(i, min_index);
            ctx.emit(
                values,
                Step::swapping(vec![i, min_index]).with_sorted(sorted.clone()),
            )?;
        }

        sorted.push(i);
        ctx.emit(values, Step::sorted(sorted.clone()))?;
    }

    sorted.push(n - 1);
    ctx.emit(values, Step::sorted(sorted.clone()))?;
    Ok(())
}
