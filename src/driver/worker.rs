//! Worker-thread runs - the bridge from the blocking driver to a UI loop.
//!
//! `run` sleeps between steps, so an interactive session runs it on a
//! worker thread and keeps polling input. Each published snapshot crosses
//! back over a channel, followed by exactly one terminal event. The driver
//! clone shares the latch and cancel flag with the caller, so the UI thread
//! can still query `is_sorting` or cancel.

use std::cell::Cell;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::RunError;
use crate::types::{SortKind, StepDelay, Value};

use super::AnimationDriver;

// =============================================================================
// TYPES
// =============================================================================

/// Events a worker run delivers: zero or more `Step`s in publish order,
/// then exactly one `Finished` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Snapshot taken after one applied step.
    Step(Vec<Value>),
    /// The run completed; carries the final sorted array.
    Finished(Vec<Value>),
    /// The run lost the latch race, was cancelled, or its worker died.
    Failed(RunError),
}

/// Receiving side of one worker run.
///
/// The event stream always ends with exactly one terminal event: a worker
/// that disconnects without reporting (it panicked mid-run) is surfaced as
/// one [`RunEvent::Failed`] carrying [`RunError::Crashed`], so a poller can
/// never wait on a dead run forever.
#[derive(Debug)]
pub struct RunHandle {
    events: Receiver<RunEvent>,
    thread: thread::JoinHandle<()>,
    /// Set once the terminal event has been handed out; later polls get
    /// `None`.
    done: Cell<bool>,
}

impl RunHandle {
    /// Next event if one is ready; `None` when the channel is idle or the
    /// terminal event was already delivered.
    pub fn try_next(&self) -> Option<RunEvent> {
        if self.done.get() {
            return None;
        }
        match self.events.try_recv() {
            Ok(event) => Some(self.deliver(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(self.deliver(RunEvent::Failed(RunError::Crashed)))
            }
        }
    }

    /// Block for the next event; `None` once the terminal event was
    /// delivered.
    pub fn next(&self) -> Option<RunEvent> {
        if self.done.get() {
            return None;
        }
        match self.events.recv() {
            Ok(event) => Some(self.deliver(event)),
            Err(_) => Some(self.deliver(RunEvent::Failed(RunError::Crashed))),
        }
    }

    /// Block until the worker thread exits.
    pub fn join(self) {
        let _ = self.thread.join();
    }

    /// Marks the stream finished when a terminal event passes through.
    fn deliver(&self, event: RunEvent) -> RunEvent {
        if !matches!(event, RunEvent::Step(_)) {
            self.done.set(true);
        }
        event
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Start `kind` on a worker thread, reporting through the returned handle.
///
/// Rejects synchronously with [`RunError::Busy`] when a run is already
/// active. The latch itself is still taken inside
/// [`run`](AnimationDriver::run), so even a racing spawn cannot produce two
/// active runs; the loser reports `Failed(Busy)` through its channel
/// instead.
pub fn spawn_run(
    driver: &AnimationDriver,
    kind: SortKind,
    pacing: StepDelay,
) -> Result<RunHandle, RunError> {
    if driver.is_sorting() {
        return Err(RunError::Busy);
    }

    let (events_tx, events) = mpsc::channel();
    let driver = driver.clone();
    let thread = thread::spawn(move || {
        let step_tx = events_tx.clone();
        let outcome = driver.run(kind, pacing, move |snapshot| {
            // The receiver may already be gone; keep sorting regardless.
            let _ = step_tx.send(RunEvent::Step(snapshot.to_vec()));
        });
        let event = match outcome {
            Ok(sorted) => RunEvent::Finished(sorted),
            Err(err) => RunEvent::Failed(err),
        };
        let _ = events_tx.send(event);
    });

    Ok(RunHandle {
        events,
        thread,
        done: Cell::new(false),
    })
}

// =============================================================================
// Tests
// =============================================================================
