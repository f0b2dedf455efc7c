use sortlab_core::{window, Step};

use crate::context::{RunContext, StepResult};

/// Merge sort. Each subrange is shown as the active partition window
/// before recursing; the merge writes back from scratch buffers one slot
/// at a time, the left buffer winning ties so equal values keep their
/// relative order.
///
/// No sorted markings are emitted mid-run: a merged subrange is only
/// locally ordered, and the sorted set must never shrink. The finalize
/// sweep marks everything once the whole array is ordered.
pub(crate) fn sort(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    if values.len() > 1 {
        sort_range(values, 0, values.len() - 1, ctx)?;
    }
    Ok(())
}

fn sort_range(
    values: &mut [u32],
    lo: usize,
    hi: usize,
    ctx: &mut RunContext<'_>,
) -> StepResult {
    if lo >= hi {
        return Ok(());
    }
    ctx.checkpoint()?;

    let mid = lo + (hi - lo) / 2;
    ctx.emit(values, Step::idle().with_partition(window(lo, hi)))?;

    sort_range(values, lo, mid, ctx)?;
    ctx.checkpoint()?;
    sort_range(values, mid + 1, hi, ctx)?;
    ctx.checkpoint()?;

    merge(values, lo, mid, hi, ctx)
}

fn merge(
    values: &mut [u32],
    lo: usize,
    mid: usize,
    hi: usize,
    ctx: &mut RunContext<'_>,
) -> StepResult {
    let left = values[lo..=mid].to_vec();
    let right = values[mid + 1..=hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;

    while i < left.len() && j < right.len() {
        ctx.emit(
            values,
            Step::comparing(vec![lo + i, mid + 1 + j]).with_partition(window(lo, hi)),
        )?;

        // Left wins ties, preserving the relative order of equal values.
        if left[i] <= right[j] {
            values[k] = left[i];
            i += 1;
        } else {
            values[k] = right[j];
            j += 1;
        }
        ctx.emit(
            values,
            Step::swapping(vec![k]).with_partition(window(lo, hi)),
        )?;
        k += 1;
    }

    while i < left.len() {
        ctx.checkpoint()?;
        values[k] = left[i];
        ctx.emit(
            values,
            Step::swapping(vec![k]).with_partition(window(lo, hi)),
        )?;
        i += 1;
        k += 1;
    }

    while j < right.len() {
        ctx.checkpoint()?;
        values[k] = right[j];
        ctx.emit(
            values,
            Step::swapping(vec![k]).with_partition(window(lo, hi)),
        )?;
        j += 1;
        k += 1;
    }

    Ok(())
}
