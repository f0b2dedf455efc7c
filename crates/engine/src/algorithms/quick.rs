use sortlab_core::{window, Step};

use crate::context::{RunContext, StepResult};

/// Quicksort with a Lomuto partition, last element as pivot. Pivot final
/// positions and single-element subranges are in their final place the
/// moment the recursion reaches them, so they join the sorted set
/// immediately.
pub(crate) fn sort(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    if values.is_empty() {
        return Ok(());
    }
    let mut sorted: Vec<usize> = Vec::new();
    sort_range(values, 0, values.len() - 1, &mut sorted, ctx)
}

fn sort_range(
    values: &mut [u32],
    lo: usize,
    hi: usize,
    sorted: &mut Vec<usize>,
    ctx: &mut RunContext<'_>,
) -> StepResult {
    if lo == hi {
        sorted.push(lo);
        ctx.emit(values, Step::sorted(sorted.clone()))?;
        return Ok(());
    }

    ctx.checkpoint()?;
    let p = partition(values, lo, hi, sorted, ctx)?;
    ctx.checkpoint()?;

    if p > lo {
        sort_range(values, lo, p - 1, sorted, ctx)?;
    }
    ctx.checkpoint()?;
    if p < hi {
        sort_range(values, p + 1, hi, sorted, ctx)?;
    }
    Ok(())
}

/// Scan `[lo, hi)` against the pivot at `hi`, keeping everything below
/// `boundary` strictly less than the pivot, then swap the pivot into its
/// final slot and mark it sorted. Returns the pivot's final index.
fn partition(
    values: &mut [u32],
    lo: usize,
    hi: usize,
    sorted: &mut Vec<usize>,
    ctx: &mut RunContext<'_>,
) -> StepResult<usize> {
    let pivot = values[hi];
    ctx.emit(
        values,
        Step::idle()
            .with_pivot(hi)
            .with_partition(window(lo, hi))
            .with_sorted(sorted.clone()),
    )?;

    let mut boundary = lo;
    for j in lo..hi {
        ctx.emit(
            values,
            Step::comparing(vec![j])
                .with_pivot(hi)
                .with_partition(window(lo, hi))
                .with_sorted(sorted.clone()),
        )?;

        if values[j] < pivot {
            ctx.emit(
                values,
                Step::swapping(vec![boundary, j])
                    .with_pivot(hi)
                    .with_partition(window(lo, hi))
                    .with_sorted(sorted.clone()),
            )?;
            values.swap(boundary, j);
            ctx.emit(
                values,
                Step::swapping(vec![boundary, j])
                    .with_pivot(hi)
                    .with_partition(window(lo, hi))
                    .with_sorted(sorted.clone()),
            )?;
            boundary += 1;
        }
    }

    // pivot moves into its final slot; the pivot highlight drops while
    // the swap itself is shown
    ctx.emit(
        values,
        Step::swapping(vec![boundary, hi])
            .with_partition(window(lo, hi))
            .with_sorted(sorted.clone()),
    )?;
    values.swap(boundary, hi);
    sorted.push(boundary);
    ctx.emit(values, Step::sorted(sorted.clone()))?;

    Ok(boundary)
}
