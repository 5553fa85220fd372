//! Error types for driver operations.
//!
//! The taxonomy is deliberately small: sort algorithms themselves have no
//! failure modes (every finite numeric array is valid input), so the only
//! errors are busy-state conflicts, cancellation, and a worker thread that
//! dies without reporting. All are signaled as typed rejections rather than
//! silently ignored, so callers can tell "ignored" apart from "will run".

use thiserror::Error;

/// Errors reported by [`AnimationDriver`](crate::driver::AnimationDriver)
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A run or reset was requested while another run holds the latch.
    ///
    /// The requested operation never starts; the active run is unaffected.
    #[error("a sort run is already in progress")]
    Busy,

    /// The active run observed a cancellation request between steps.
    ///
    /// The observed array keeps the state reached by the last applied step.
    #[error("sort run cancelled")]
    Cancelled,

    /// The worker thread stopped without reporting a result.
    ///
    /// Synthesized by [`RunHandle`](crate::driver::RunHandle) when its
    /// channel disconnects before a terminal event arrives, so a dead
    /// worker cannot leave the session latched busy.
    #[error("sort worker stopped unexpectedly")]
    Crashed,
}
