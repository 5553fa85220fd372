//! The six sorting algorithms, written against [`StepRecorder`].
//!
//! Each function reads and mutates only through its recorder, so the step
//! log captures exactly the mutations the algorithm performs, in order.
//! None of them know about timing or rendering.
//!
//! Emission rules worth calling out:
//! - Bubble swaps whenever an adjacent pair is out of order; no early exit.
//! - Insertion logs one assignment per shift and places the held key only
//!   when it actually moved, so sorted input logs nothing.
//! - Selection swaps only when the scanned minimum is not already in place.
//! - Quick keeps the Lomuto scheme with the last element as pivot,
//!   including its degenerate self-swaps and the final pivot placement.
//!   Sorted input is its quadratic worst case; do not "fix" that by
//!   randomizing the pivot.
//! - Merge logs one assignment per element placed, drains included.
//! - Heap logs every sift-down exchange and every root-to-tail extraction.

use super::recorder::StepRecorder;
use crate::types::Value;

/// Adjacent-pair bubble sort.
pub(super) fn bubble(rec: &mut StepRecorder) {
    let n = rec.len();
    for i in 0..n {
        for j in 0..(n - i - 1) {
            if rec.get(j) > rec.get(j + 1) {
                rec.swap(j, j + 1);
            }
        }
    }
}

/// Insertion sort; shifts are assignments, the key placement lands last.
pub(super) fn insertion(rec: &mut StepRecorder) {
    for i in 1..rec.len() {
        let key = rec.get(i);
        let mut slot = i;
        while slot > 0 && rec.get(slot - 1) > key {
            let shifted = rec.get(slot - 1);
            rec.assign(slot, shifted);
            slot -= 1;
        }
        if slot != i {
            rec.assign(slot, key);
        }
    }
}

/// Selection sort; at most one swap per outer pass.
pub(super) fn selection(rec: &mut StepRecorder) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..n {
            if rec.get(j) < rec.get(min) {
                min = j;
            }
        }
        if min != i {
            rec.swap(i, min);
        }
    }
}

/// Quick sort, Lomuto partition, last element as pivot.
pub(super) fn quick(rec: &mut StepRecorder) {
    let n = rec.len();
    if n > 1 {
        quick_range(rec, 0, n - 1);
    }
}

fn quick_range(rec: &mut StepRecorder, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = partition(rec, low, high);
    if pivot > low {
        quick_range(rec, low, pivot - 1);
    }
    if pivot < high {
        quick_range(rec, pivot + 1, high);
    }
}

/// Partition [low, high] around the value at `high`; returns the pivot's
/// final index.
fn partition(rec: &mut StepRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.get(high);
    let mut boundary = low;
    for j in low..high {
        if rec.get(j) < pivot {
            rec.swap(boundary, j);
            boundary += 1;
        }
    }
    rec.swap(boundary, high);
    boundary
}

/// Top-down merge sort.
pub(super) fn merge(rec: &mut StepRecorder) {
    let n = rec.len();
    if n > 1 {
        merge_range(rec, 0, n - 1);
    }
}

fn merge_range(rec: &mut StepRecorder, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    merge_range(rec, low, mid);
    merge_range(rec, mid + 1, high);
    merge_halves(rec, low, mid, high);
}

/// Merge the sorted halves [low, mid] and [mid+1, high]; ties take the
/// left element first.
fn merge_halves(rec: &mut StepRecorder, low: usize, mid: usize, high: usize) {
    let left: Vec<Value> = (low..=mid).map(|k| rec.get(k)).collect();
    let right: Vec<Value> = ((mid + 1)..=high).map(|k| rec.get(k)).collect();

    let mut i = 0;
    let mut j = 0;
    let mut out = low;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            rec.assign(out, left[i]);
            i += 1;
        } else {
            rec.assign(out, right[j]);
            j += 1;
        }
        out += 1;
    }
    while i < left.len() {
        rec.assign(out, left[i]);
        i += 1;
        out += 1;
    }
    while j < right.len() {
        rec.assign(out, right[j]);
        j += 1;
        out += 1;
    }
}

/// Heap sort over an in-place max-heap.
pub(super) fn heap(rec: &mut StepRecorder) {
    let n = rec.len();
    if n < 2 {
        return;
    }
    for root in (0..n / 2).rev() {
        sift_down(rec, n, root);
    }
    for end in (1..n).rev() {
        rec.swap(0, end);
        sift_down(rec, end, 0);
    }
}

/// Restore the max-heap property for the subtree at `root`, considering
/// only the first `len` elements.
fn sift_down(rec: &mut StepRecorder, len: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < len && rec.get(left) > rec.get(largest) {
        largest = left;
    }
    if right < len && rec.get(right) > rec.get(largest) {
        largest = right;
    }
    if largest != root {
        rec.swap(root, largest);
        sift_down(rec, len, largest);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::engine::script;
    use crate::types::{SortKind, SortStep};

    #[test]
    fn bubble_first_swap_is_the_leading_pair() {
        let script = script(SortKind::Bubble, &[5, 3, 1, 4, 2]);
        assert_eq!(script.steps()[0], SortStep::Swap(0, 1));
        assert_eq!(script.sorted(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn bubble_sorted_input_emits_nothing() {
        let script = script(SortKind::Bubble, &[1, 2, 3, 4]);
        assert!(script.is_empty());
    }

    #[test]
    fn insertion_shifts_then_places_the_key() {
        let script = script(SortKind::Insertion, &[3, 1]);
        assert_eq!(
            script.steps(),
            &[SortStep::Assign(1, 3), SortStep::Assign(0, 1)]
        );
        assert_eq!(script.sorted(), &[1, 3]);
    }

    #[test]
    fn insertion_sorted_input_emits_nothing() {
        let script = script(SortKind::Insertion, &[1, 2, 2, 9]);
        assert!(script.is_empty());
    }

    #[test]
    fn selection_swaps_only_displaced_minima() {
        // One swap fixes both ends; the middle pass finds itself in place.
        let script = script(SortKind::Selection, &[3, 2, 1]);
        assert_eq!(script.steps(), &[SortStep::Swap(0, 2)]);
        assert_eq!(script.sorted(), &[1, 2, 3]);
    }

    #[test]
    fn selection_sorted_input_emits_nothing() {
        let script = script(SortKind::Selection, &[1, 2, 3]);
        assert!(script.is_empty());
    }

    #[test]
    fn quick_two_elements_is_one_pivot_swap() {
        let script = script(SortKind::Quick, &[2, 1]);
        assert_eq!(script.steps(), &[SortStep::Swap(0, 1)]);
        assert_eq!(script.sorted(), &[1, 2]);
    }

    #[test]
    fn quick_sorted_input_emits_only_noop_swaps() {
        // Last-element pivot degenerates on sorted input: every element is
        // "placed" where it already is.
        let script = script(SortKind::Quick, &[1, 2, 3]);
        assert!(!script.is_empty());

        let mut values = vec![1, 2, 3];
        for step in script.steps() {
            assert!(step.is_noop(&values), "{step:?} should not move anything");
            step.apply(&mut values);
        }
        assert_eq!(values, script.sorted());
    }

    #[test]
    fn merge_sorted_input_still_assigns() {
        let script = script(SortKind::Merge, &[1, 2, 3]);
        assert_eq!(script.len(), 5);
        for step in script.steps() {
            assert!(matches!(step, SortStep::Assign(_, _)));
        }
        assert_eq!(script.sorted(), &[1, 2, 3]);
    }

    #[test]
    fn merge_ties_take_the_left_half_first() {
        let script = script(SortKind::Merge, &[2, 2, 1]);
        assert_eq!(script.sorted(), &[1, 2, 2]);
        // Final merge drains the right singleton [1] first, then the left
        // pair, touching index 0 with the right element before the lefts.
        assert_eq!(script.steps().last(), Some(&SortStep::Assign(2, 2)));
    }

    #[test]
    fn heap_extracts_through_the_root() {
        let script = script(SortKind::Heap, &[1, 2]);
        // Build promotes 2 to the root, extraction swaps it back out.
        assert_eq!(
            script.steps(),
            &[SortStep::Swap(0, 1), SortStep::Swap(0, 1)]
        );
        assert_eq!(script.sorted(), &[1, 2]);
    }

    #[test]
    fn heap_handles_duplicates() {
        let script = script(SortKind::Heap, &[4, 1, 4, 2, 4]);
        assert_eq!(script.sorted(), &[1, 2, 4, 4, 4]);
    }
}
