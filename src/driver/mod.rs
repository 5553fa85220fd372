//! Animation driver - paced application of sort scripts to the session
//! array.
//!
//! The driver owns the observed array for the whole session: runs mutate it
//! one step at a time, `reset` replaces it wholesale, and everyone else only
//! ever sees cloned snapshots. A single atomic latch backs both `run` and
//! `reset`, so "one run at a time" is enforced here and not left to whoever
//! draws the buttons.
//!
//! Step order is fixed for every algorithm: apply the mutation, then
//! optionally sleep, then publish the snapshot. Suspension only ever happens
//! between steps; a swap is never observable half-applied because each
//! mutation happens under the array lock.
//!
//! # Example
//!
//! ```
//! use sort_tui::driver::AnimationDriver;
//! use sort_tui::types::{SortKind, StepDelay};
//!
//! let driver = AnimationDriver::new(vec![3, 1, 2]);
//! let sorted = driver
//!     .run(SortKind::Quick, StepDelay::none(), |_snapshot| {})
//!     .unwrap();
//! assert_eq!(sorted, vec![1, 2, 3]);
//! assert!(!driver.is_sorting());
//! ```

mod worker;

pub use worker::{spawn_run, RunEvent, RunHandle};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use crate::engine;
use crate::error::RunError;
use crate::types::{SortKind, StepDelay, Value};

// =============================================================================
// DRIVER
// =============================================================================

/// Owns the observed array and sequences paced sort runs over it.
///
/// Cloning is cheap and shares the array, the busy latch, and the cancel
/// flag, so a clone can watch or cancel a run started elsewhere.
#[derive(Clone)]
pub struct AnimationDriver {
    /// The session array; mutated one step at a time during a run.
    values: Arc<Mutex<Vec<Value>>>,
    /// IsSorting latch; checked-and-set atomically at run start.
    sorting: Arc<AtomicBool>,
    /// Cancellation request for the active run, checked between steps.
    cancelled: Arc<AtomicBool>,
}

/// Clears the latch when a run leaves scope, on every exit path.
struct LatchGuard<'a>(&'a AtomicBool);

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl AnimationDriver {
    /// Create a driver owning `initial` as the session array.
    pub fn new(initial: Vec<Value>) -> Self {
        Self {
            values: Arc::new(Mutex::new(initial)),
            sorting: Arc::new(AtomicBool::new(false)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a run holds the latch.
    pub fn is_sorting(&self) -> bool {
        self.sorting.load(Ordering::SeqCst)
    }

    /// Clone the current array state.
    pub fn snapshot(&self) -> Vec<Value> {
        self.lock().clone()
    }

    /// Current array length.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when the session array is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Ask the active run to stop before its next step.
    ///
    /// No-op when idle; the flag is cleared when the next run starts, so a
    /// late cancel cannot kill a future run.
    pub fn cancel(&self) {
        if self.is_sorting() {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the session array, typically with a fresh shuffle.
    ///
    /// Takes the same latch as [`run`](Self::run), so a reset can never
    /// race an active run; while one is running this rejects with
    /// [`RunError::Busy`].
    pub fn reset(&self, values: Vec<Value>) -> Result<(), RunError> {
        if self
            .sorting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RunError::Busy);
        }
        let _latch = LatchGuard(&self.sorting);

        log::debug!("reset to {} values", values.len());
        *self.lock() = values;
        Ok(())
    }

    /// Run `kind` over the session array, publishing one snapshot per step.
    ///
    /// Rejects with [`RunError::Busy`] if another run is active. Otherwise
    /// records the script for the current array, then for each step:
    /// applies it, sleeps for the configured delay when pacing is enabled,
    /// and hands the post-step snapshot to `on_step`. Returns the final
    /// sorted array, or [`RunError::Cancelled`] if [`cancel`](Self::cancel)
    /// was observed between steps.
    pub fn run<F>(
        &self,
        kind: SortKind,
        pacing: StepDelay,
        mut on_step: F,
    ) -> Result<Vec<Value>, RunError>
    where
        F: FnMut(&[Value]),
    {
        if self
            .sorting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(RunError::Busy);
        }
        let _latch = LatchGuard(&self.sorting);
        self.cancelled.store(false, Ordering::SeqCst);

        let script = {
            let values = self.lock();
            engine::script(kind, &values)
        };
        log::debug!("{kind}: {} steps over {} values", script.len(), self.len());

        for step in script.steps() {
            if self.cancelled.load(Ordering::SeqCst) {
                log::info!("{kind}: cancelled");
                return Err(RunError::Cancelled);
            }

            let snapshot = {
                let mut values = self.lock();
                step.apply(&mut values);
                values.clone()
            };
            if pacing.enabled {
                thread::sleep(pacing.delay);
            }
            on_step(&snapshot);
        }

        let sorted = script.into_sorted();
        debug_assert_eq!(*self.lock(), sorted);
        log::debug!("{kind}: done");
        Ok(sorted)
    }

    /// Lock the session array.
    ///
    /// A poisoned lock means some other run panicked mid-step; the values
    /// themselves are still coherent, so recover them.
    fn lock(&self) -> MutexGuard<'_, Vec<Value>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn run_returns_the_sorted_array() {
        let driver = AnimationDriver::new(vec![5, 3, 1, 4, 2]);
        let sorted = driver
            .run(SortKind::Bubble, StepDelay::none(), |_| {})
            .unwrap();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(driver.snapshot(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn publishes_one_snapshot_per_step_in_order() {
        let input = vec![4, 2, 5, 1, 3];
        let driver = AnimationDriver::new(input.clone());
        let script = engine::script(SortKind::Insertion, &input);

        let mut snapshots = Vec::new();
        driver
            .run(SortKind::Insertion, StepDelay::none(), |snapshot| {
                snapshots.push(snapshot.to_vec());
            })
            .unwrap();

        assert_eq!(snapshots.len(), script.len());
        let mut replay = input.clone();
        for (step, snapshot) in script.steps().iter().zip(&snapshots) {
            step.apply(&mut replay);
            assert_eq!(&replay, snapshot, "snapshot out of order");
        }
    }

    #[test]
    fn latch_is_set_during_the_run_and_clear_around_it() {
        let driver = AnimationDriver::new(vec![2, 1]);
        assert!(!driver.is_sorting());

        let watcher = driver.clone();
        let seen_busy = Rc::new(Cell::new(false));
        let seen_busy_clone = seen_busy.clone();
        driver
            .run(SortKind::Bubble, StepDelay::none(), move |_| {
                seen_busy_clone.set(watcher.is_sorting());
            })
            .unwrap();

        assert!(seen_busy.get(), "latch should be held while publishing");
        assert!(!driver.is_sorting());
    }

    #[test]
    fn concurrent_run_is_rejected() {
        let driver = AnimationDriver::new(vec![3, 1, 2]);
        let inner = driver.clone();

        let rejection = Rc::new(Cell::new(None));
        let rejection_clone = rejection.clone();
        driver
            .run(SortKind::Bubble, StepDelay::none(), move |_| {
                let result = inner.run(SortKind::Quick, StepDelay::none(), |_| {});
                rejection_clone.set(Some(result.unwrap_err()));
            })
            .unwrap();

        assert_eq!(rejection.get(), Some(RunError::Busy));
    }

    #[test]
    fn reset_is_rejected_while_running() {
        let driver = AnimationDriver::new(vec![2, 1]);
        let inner = driver.clone();

        let rejection = Rc::new(Cell::new(None));
        let rejection_clone = rejection.clone();
        driver
            .run(SortKind::Bubble, StepDelay::none(), move |_| {
                rejection_clone.set(Some(inner.reset(vec![9]).unwrap_err()));
            })
            .unwrap();

        assert_eq!(rejection.get(), Some(RunError::Busy));
        // The rejected reset must not have touched the array.
        assert_eq!(driver.snapshot(), vec![1, 2]);
    }

    #[test]
    fn reset_swaps_the_array_when_idle() {
        let driver = AnimationDriver::new(vec![1, 2, 3]);
        driver.reset(vec![9, 8]).unwrap();
        assert_eq!(driver.snapshot(), vec![9, 8]);
        assert_eq!(driver.len(), 2);
        assert!(!driver.is_sorting());
    }

    #[test]
    fn cancel_stops_between_steps() {
        let driver = AnimationDriver::new(vec![5, 4, 3, 2, 1]);
        let canceller = driver.clone();

        let result = driver.run(SortKind::Bubble, StepDelay::none(), move |_| {
            // First published step requests a stop; the loop must notice
            // before applying the next one.
            canceller.cancel();
        });

        assert_eq!(result.unwrap_err(), RunError::Cancelled);
        assert!(!driver.is_sorting());
        // Exactly one step (the first bubble swap) was applied.
        assert_eq!(driver.snapshot(), vec![4, 5, 3, 2, 1]);
    }

    #[test]
    fn cancel_while_idle_does_not_poison_the_next_run() {
        let driver = AnimationDriver::new(vec![2, 1]);
        driver.cancel();
        let sorted = driver
            .run(SortKind::Bubble, StepDelay::none(), |_| {})
            .unwrap();
        assert_eq!(sorted, vec![1, 2]);
    }

    #[test]
    fn empty_array_runs_with_zero_callbacks() {
        let driver = AnimationDriver::new(Vec::new());
        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let sorted = driver
            .run(SortKind::Merge, StepDelay::none(), move |_| {
                calls_clone.set(calls_clone.get() + 1);
            })
            .unwrap();
        assert!(sorted.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn enabled_pacing_costs_at_least_delay_per_step() {
        // Three values in reverse bubble-sort in exactly three swaps.
        let driver = AnimationDriver::new(vec![3, 2, 1]);
        let script = engine::script(SortKind::Bubble, &[3, 2, 1]);
        assert_eq!(script.len(), 3);

        let started = Instant::now();
        driver
            .run(SortKind::Bubble, StepDelay::millis(50), |_| {})
            .unwrap();
        let elapsed = started.elapsed();

        assert!(
            elapsed >= Duration::from_millis(150),
            "3 steps at 50ms took only {elapsed:?}"
        );
    }

    #[test]
    fn runs_can_follow_each_other() {
        let driver = AnimationDriver::new(vec![3, 1, 2]);
        driver
            .run(SortKind::Heap, StepDelay::none(), |_| {})
            .unwrap();
        driver.reset(vec![6, 5, 4]).unwrap();
        let sorted = driver
            .run(SortKind::Selection, StepDelay::none(), |_| {})
            .unwrap();
        assert_eq!(sorted, vec![4, 5, 6]);
    }
}
