use serde::{Deserialize, Serialize};

/// Point-in-time snapshot descriptor emitted by a sorting engine.
///
/// A `Step` names the indices playing each visual role at one moment of an
/// algorithm's execution. It is a full snapshot, not a diff: a renderer
/// redraws everything from the step plus the array contents that accompany
/// it. All indices are valid for the array the step was emitted against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Indices currently being compared.
    pub comparing: Vec<usize>,
    /// Indices being swapped, or the slot of a single-slot write.
    pub swapping: Vec<usize>,
    /// Indices known to be in their final position. Grows monotonically
    /// across an engine's steps.
    pub sorted: Vec<usize>,
    /// Index acting as the pivot, if any.
    pub pivot: Option<usize>,
    /// Indices of the active partition window, if any.
    pub partition: Vec<usize>,
}

impl Step {
    /// A step with no highlighted indices.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn comparing(indices: Vec<usize>) -> Self {
        Self {
            comparing: indices,
            ..Self::default()
        }
    }

    pub fn swapping(indices: Vec<usize>) -> Self {
        Self {
            swapping: indices,
            ..Self::default()
        }
    }

    pub fn sorted(indices: Vec<usize>) -> Self {
        Self {
            sorted: indices,
            ..Self::default()
        }
    }

    pub fn with_sorted(mut self, sorted: Vec<usize>) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_partition(mut self, partition: Vec<usize>) -> Self {
        self.partition = partition;
        self
    }

    /// True if every index named by this step is valid for an array of
    /// length `len`.
    pub fn in_bounds(&self, len: usize) -> bool {
        let indices = self
            .comparing
            .iter()
            .chain(&self.swapping)
            .chain(&self.sorted)
            .chain(&self.partition)
            .chain(self.pivot.as_ref());
        indices.into_iter().all(|&i| i < len)
    }
}

/// The indices of the closed range `[lo, hi]`, used for partition windows.
pub fn window(lo: usize, hi: usize) -> Vec<usize> {
    (lo..=hi).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let step = Step::comparing(vec![0, 1])
            .with_sorted(vec![4])
            .with_pivot(3)
            .with_partition(window(0, 4));

        assert_eq!(step.comparing, vec![0, 1]);
        assert_eq!(step.sorted, vec![4]);
        assert_eq!(step.pivot, Some(3));
        assert_eq!(step.partition, vec![0, 1, 2, 3, 4]);
        assert!(step.swapping.is_empty());
    }

    #[test]
    fn test_in_bounds() {
        let step = Step::swapping(vec![2, 3]).with_pivot(4);
        assert!(step.in_bounds(5));
        assert!(!step.in_bounds(4));
        assert!(Step::idle().in_bounds(0));
    }

    #[test]
    fn test_window() {
        assert_eq!(window(2, 4), vec![2, 3, 4]);
        assert_eq!(window(1, 1), vec![1]);
    }

    #[test]
    fn test_serialization_round_trip() {
        let step = Step::comparing(vec![1, 2]).with_partition(window(0, 3));
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
