use sortlab_core::Step;

use crate::context::{RunContext, StepResult};

/// Insertion sort. Gap closing is modelled as single-slot writes, one
/// swap-frame pair per shifted slot, so the renderer shows every element
/// sliding over rather than the inserted value appearing in place.
pub(crate) fn sort(values: &mut [u32], ctx: &mut RunContext<'_>) -> StepResult {
    let n = values.len();
    if n == 0 {
        return Ok(());
    }

    let mut sorted: Vec<usize> = vec![0];
    ctx.emit(values, Step::sorted(sorted.clone()))?;

    for i in 1..n {
        let current = values[i];
        let mut slot = i;

        ctx.emit(values, Step::comparing(vec![i]).with_sorted(sorted.clone()))?;
        ctx.emit(
            values,
            Step::comparing(vec![i, slot - 1]).with_sorted(sorted.clone()),
        )?;

        while slot > 0 && values[slot - 1] > current {
            ctx.emit(
                values,
                Step::swapping(vec![slot - 1, slot]).with_sorted(sorted.clone()),
            )?;
            values[slot] = values[slot - 1];
            ctx.emit(
                values,
                Step::swapping(vec![slot - 1, slot]).with_sorted(sorted.clone()),
            )?;
            ctx.emit(values, Step::comparing(vec![i]).with_sorted(sorted.clone()))?;

            slot -= 1;
            if slot > 0 {
                ctx.emit(
                    values,
                    Step::comparing(vec![i, slot - 1]).with_sorted(sorted.clone()),
                )?;
            }
        }

        let shifted = slot != i;
        values[slot] = current;
        sorted = (0..=i).collect();

        if shifted {
            ctx.emit(
                values,
                Step::swapping(vec![slot]).with_sorted(sorted.clone()),
            )?;
        }
        ctx.emit(values, Step::sorted(sorted.clone()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelFlag;
    use crate::context::{CancelAfter, Cancelled, VecSink};
    use events::Frame;
    use sortlab_core::{in_bounds, is_sorted};

    fn run(values: &mut Vec<u32>) -> Vec<Frame> {
        let mut sink = VecSink::default();
        let mut ctx = RunContext::new(&mut sink, CancelFlag::new());
        sort(values, &mut ctx).unwrap();
        sink.frames
    }

    fn swapping_count(frames: &[Frame]) -> usize {
        frames.iter().filter(|f| !f.step.swapping.is_empty()).count()
    }

    #[test]
    fn test_sorts_and_permutes() {
        let cases: Vec<Vec<u32>> = vec![
            vec![],
            vec![42],
            vec![20, 20, 20],
            vec![10, 20, 30, 40],
            vec![40, 30, 20, 10],
            vec![55, 17, 88, 17, 203, 11],
        ];

        for original in cases {
            let mut values = original.clone();
            run(&mut values);

            assert!(is_sorted(&values), "not sorted: {:?}", values);
            let mut expected = original.clone();
            expected.sort();
            assert_eq!(values, expected, "not a permutation of {:?}", original);
        }
    }

    #[test]
    fn test_every_shift_is_a_single_slot_write() {
        // reverse input: inserting element i shifts i slots
        let mut values = vec![40, 30, 20, 10];
        let frames = run(&mut values);

        // shifts: 1 + 2 + 3 = 6, two frames each, plus one placement
        // frame per inserted element
        assert_eq!(swapping_count(&frames), 6 * 2 + 3);
    }

    #[test]
    fn test_all_equal_has_no_swaps() {
        let mut values = vec![20, 20, 20];
        let frames = run(&mut values);
        assert_eq!(swapping_count(&frames), 0);

        let last = frames.last().unwrap();
        assert_eq!(last.step.sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_sorted_prefix_grows_per_insertion() {
        let mut values = vec![30, 10, 20];
        let frames = run(&mut values);

        // the prefix markers are the frames with only a sorted set
        let prefixes: Vec<usize> = frames
            .iter()
            .filter(|f| f.step.comparing.is_empty() && f.step.swapping.is_empty())
            .map(|f| f.step.sorted.len())
            .collect();
        assert_eq!(prefixes, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancellation_at_every_suspension_point() {
        let original = vec![70, 20, 140, 35];
        let total = run(&mut original.clone()).len();

        for point in 1..total {
            let mut values = original.clone();
            let flag = CancelFlag::new();
            let mut sink = CancelAfter::new(flag.clone(), point);
            let mut ctx = RunContext::new(&mut sink, flag);

            assert_eq!(sort(&mut values, &mut ctx), Err(Cancelled));
            assert_eq!(sink.frames.len(), point);
            assert_eq!(values.len(), original.len());
            assert!(in_bounds(&values));
        }
    }
}
