//! Sort engine - pure algorithmic logic, no timing, no rendering.
//!
//! The engine turns (algorithm, input) into a [`SortScript`]: the finite,
//! ordered sequence of atomic mutations the algorithm performs, plus the
//! sorted array those mutations arrive at. The driver walks the script at
//! its own pace; tests replay it instantly.
//!
//! # Example
//!
//! ```
//! use sort_tui::engine::script;
//! use sort_tui::types::SortKind;
//!
//! let script = script(SortKind::Bubble, &[3, 1, 2]);
//! assert_eq!(script.sorted(), &[1, 2, 3]);
//!
//! let mut values = vec![3, 1, 2];
//! script.apply_to(&mut values);
//! assert_eq!(values, script.sorted());
//! ```

mod recorder;
mod script;
mod sorts;

pub use script::SortScript;

use crate::types::{SortKind, Value};
use recorder::StepRecorder;

/// Record the full step sequence for `kind` over a working copy of `input`.
///
/// The input is never mutated; empty and single-element inputs yield an
/// empty script.
pub fn script(kind: SortKind, input: &[Value]) -> SortScript {
    let mut rec = StepRecorder::new(input.to_vec());
    match kind {
        SortKind::Bubble => sorts::bubble(&mut rec),
        SortKind::Insertion => sorts::insertion(&mut rec),
        SortKind::Selection => sorts::selection(&mut rec),
        SortKind::Quick => sorts::quick(&mut rec),
        SortKind::Merge => sorts::merge(&mut rec),
        SortKind::Heap => sorts::heap(&mut rec),
    }
    rec.finish()
}

// =============================================================================
// Tests
// =============================================================================
