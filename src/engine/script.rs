//! Sort scripts - the engine's output.
//!
//! A `SortScript` is the finite, materialized step sequence for one run,
//! paired with the final sorted array the steps produce. It carries no
//! timing: the driver decides how fast to walk it, and tests can replay it
//! instantly. Iterating `steps()` again restarts from scratch; scripts are
//! never resumed mid-sequence.

use crate::types::{SortStep, Value};

/// The recorded step sequence for one algorithm over one input, plus the
/// sorted result those steps arrive at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortScript {
    steps: Vec<SortStep>,
    sorted: Vec<Value>,
}

impl SortScript {
    pub(super) fn new(steps: Vec<SortStep>, sorted: Vec<Value>) -> Self {
        Self { steps, sorted }
    }

    /// The steps, in the exact order the algorithm performed them.
    pub fn steps(&self) -> &[SortStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the algorithm had nothing to do (empty, single-element, or
    /// a short-circuiting algorithm on sorted input).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final array state the script arrives at.
    pub fn sorted(&self) -> &[Value] {
        &self.sorted
    }

    /// Consume the script, keeping only the sorted result.
    pub fn into_sorted(self) -> Vec<Value> {
        self.sorted
    }

    /// Replay every step onto `values`.
    ///
    /// `values` must be the same array the script was recorded from.
    pub fn apply_to(&self, values: &mut [Value]) {
        for step in &self.steps {
            step.apply(values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reaches_the_sorted_result() {
        let script = SortScript::new(
            vec![SortStep::Swap(0, 2), SortStep::Assign(1, 4)],
            vec![1, 4, 9],
        );
        let mut values = vec![9, 7, 1];
        script.apply_to(&mut values);
        assert_eq!(values, script.sorted());
    }

    #[test]
    fn into_sorted_keeps_only_the_result() {
        let script = SortScript::new(vec![SortStep::Swap(0, 1)], vec![1, 2]);
        assert_eq!(script.into_sorted(), vec![1, 2]);
    }

    #[test]
    fn empty_script_is_a_no_op() {
        let script = SortScript::new(Vec::new(), vec![5]);
        let mut values = vec![5];
        script.apply_to(&mut values);
        assert!(script.is_empty());
        assert_eq!(script.len(), 0);
        assert_eq!(values, vec![5]);
    }
}
