//! Core types for sort-tui.
//!
//! These types define what a sort run is made of: the values being sorted,
//! the algorithm selector, the atomic mutation steps the engine emits, and
//! the pacing configuration the driver applies between steps.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Values
// =============================================================================

/// The element type of the observed array.
///
/// Values are opaque comparable magnitudes to the engine; the renderer
/// additionally uses them as bar heights.
pub type Value = i32;

// =============================================================================
// Sort selection
// =============================================================================

/// The supported sorting algorithms.
///
/// Selected once per run and immutable for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
}

impl SortKind {
    /// All kinds, in declaration order.
    pub const ALL: [SortKind; 6] = [
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Quick,
        SortKind::Merge,
        SortKind::Heap,
    ];

    /// Human-readable name, as shown in the status line.
    pub const fn label(&self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Quick => "Quick Sort",
            SortKind::Merge => "Merge Sort",
            SortKind::Heap => "Heap Sort",
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Steps
// =============================================================================

/// One atomic, observable mutation of the working array.
///
/// Steps are produced by the engine in exactly the order the algorithm
/// performs them and applied by the driver one at a time. Indices are
/// preconditions: a step built for an array of length N only makes sense
/// on an array of length N.
///
/// # Example
///
/// ```
/// use sort_tui::types::SortStep;
///
/// let mut values = vec![5, 3, 1];
/// SortStep::Swap(0, 1).apply(&mut values);
/// SortStep::Assign(2, 9).apply(&mut values);
/// assert_eq!(values, vec![3, 5, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStep {
    /// Exchange the values at two indices.
    Swap(usize, usize),
    /// Write a value at an index.
    Assign(usize, Value),
}

impl SortStep {
    /// Apply this mutation to `values`.
    ///
    /// Panics on out-of-range indices; those are programming errors in the
    /// producing algorithm, not runtime conditions.
    pub fn apply(&self, values: &mut [Value]) {
        match *self {
            SortStep::Swap(i, j) => values.swap(i, j),
            SortStep::Assign(i, value) => values[i] = value,
        }
    }

    /// Check if applying this step would leave the array unchanged.
    pub fn is_noop(&self, values: &[Value]) -> bool {
        match *self {
            SortStep::Swap(i, j) => i == j || values[i] == values[j],
            SortStep::Assign(i, value) => values[i] == value,
        }
    }
}

// =============================================================================
// Pacing
// =============================================================================

/// Pacing configuration for a run: how long the driver suspends between
/// steps, and whether it suspends at all.
///
/// Defaults to a 1 ms delay, enabled.
///
/// # Example
///
/// ```
/// use sort_tui::types::StepDelay;
///
/// let pacing = StepDelay::millis(50);
/// assert!(pacing.enabled);
/// assert!(!StepDelay::none().enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDelay {
    /// Suspension between consecutive steps.
    pub delay: Duration,
    /// When false, steps are applied back to back.
    pub enabled: bool,
}

impl StepDelay {
    /// Delay of `ms` milliseconds between steps.
    pub const fn millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            enabled: true,
        }
    }

    /// No suspension between steps.
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
            enabled: false,
        }
    }
}

impl Default for StepDelay {
    fn default() -> Self {
        Self::millis(1)
    }
}

// =============================================================================
// Tests
// =============================================================================
