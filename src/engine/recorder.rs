//! Step recorder - the mutation interface the algorithms write through.
//!
//! A `StepRecorder` owns the working copy of the array for one recording
//! pass. Algorithms read values through it and mutate exclusively through
//! [`swap`](StepRecorder::swap) and [`assign`](StepRecorder::assign), so
//! every mutation lands in the step log in execution order. No algorithm
//! touches state outside its recorder.

use crate::types::{SortStep, Value};

use super::script::SortScript;

/// Working copy plus the ordered log of mutations applied to it.
pub(super) struct StepRecorder {
    values: Vec<Value>,
    steps: Vec<SortStep>,
}

impl StepRecorder {
    pub(super) fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            steps: Vec::new(),
        }
    }

    /// Number of values in the working copy.
    pub(super) fn len(&self) -> usize {
        self.values.len()
    }

    /// Read the value at `index`.
    pub(super) fn get(&self, index: usize) -> Value {
        self.values[index]
    }

    /// Exchange two indices and log the step.
    pub(super) fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.steps.push(SortStep::Swap(i, j));
    }

    /// Write `value` at `index` and log the step.
    pub(super) fn assign(&mut self, index: usize, value: Value) {
        self.values[index] = value;
        self.steps.push(SortStep::Assign(index, value));
    }

    /// Finish recording: the log becomes the script, the working copy its
    /// final (sorted) state.
    pub(super) fn finish(self) -> SortScript {
        SortScript::new(self.steps, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_are_logged_in_order() {
        let mut rec = StepRecorder::new(vec![3, 1, 2]);
        rec.swap(0, 1);
        rec.assign(2, 7);

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.get(0), 1);
        assert_eq!(rec.get(2), 7);

        let script = rec.finish();
        assert_eq!(
            script.steps(),
            &[SortStep::Swap(0, 1), SortStep::Assign(2, 7)]
        );
        assert_eq!(script.sorted(), &[1, 3, 7]);
    }

    #[test]
    fn empty_recorder_yields_empty_script() {
        let script = StepRecorder::new(Vec::new()).finish();
        assert!(script.is_empty());
        assert!(script.sorted().is_empty());
    }
}
