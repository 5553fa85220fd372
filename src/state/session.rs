//! Session state - the reactive values one visualizer session renders from.
//!
//! Holds the observed array, the IsSorting flag, and the pacing
//! configuration, plus a status line for surfacing rejections. Reading
//! inside an effect subscribes; writing notifies synchronously.
//!
//! The driver stays the source of truth for the array during a run; the
//! event loop copies its snapshots in here, and the render effect only ever
//! reads.

use spark_signals::{signal, Signal};

use crate::types::{StepDelay, Value};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Bars generated at startup when no length argument is given.
pub const DEFAULT_LENGTH: usize = 50;

/// Delay between steps, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static ARRAY: Signal<Vec<Value>> = signal(Vec::new());
    static IS_SORTING: Signal<bool> = signal(false);
    static DELAY_MS: Signal<u64> = signal(DEFAULT_DELAY_MS);
    static WITH_DELAY: Signal<bool> = signal(true);
    static STATUS: Signal<String> = signal(String::new());
    static VIEWPORT: Signal<(u16, u16)> = signal((80, 24));
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Current observed array.
pub fn array() -> Vec<Value> {
    ARRAY.with(|s| s.get())
}

/// Replace the observed array (one snapshot, or a fresh shuffle).
pub fn set_array(values: Vec<Value>) {
    ARRAY.with(|s| s.set(values));
}

/// Whether a run is active, as last synced from the driver.
pub fn is_sorting() -> bool {
    IS_SORTING.with(|s| s.get())
}

pub fn set_is_sorting(on: bool) {
    IS_SORTING.with(|s| s.set(on));
}

/// Configured delay between steps, in milliseconds.
pub fn delay_ms() -> u64 {
    DELAY_MS.with(|s| s.get())
}

pub fn set_delay_ms(ms: u64) {
    DELAY_MS.with(|s| s.set(ms));
}

/// Whether runs suspend between steps at all.
pub fn with_delay() -> bool {
    WITH_DELAY.with(|s| s.get())
}

pub fn set_with_delay(on: bool) {
    WITH_DELAY.with(|s| s.set(on));
}

/// Status message shown in the header.
pub fn status() -> String {
    STATUS.with(|s| s.get())
}

pub fn set_status(message: impl Into<String>) {
    STATUS.with(|s| s.set(message.into()));
}

/// Terminal size the renderer lays out against.
pub fn viewport() -> (u16, u16) {
    VIEWPORT.with(|s| s.get())
}

pub fn set_viewport(size: (u16, u16)) {
    VIEWPORT.with(|s| s.set(size));
}

/// Pacing for the next run, composed from the session configuration.
///
/// A run captures this once at spawn time; changing the signals afterwards
/// only affects later runs.
pub fn step_delay() -> StepDelay {
    if with_delay() {
        StepDelay::millis(delay_ms())
    } else {
        StepDelay::none()
    }
}

/// Restore every session signal to its startup value.
pub fn reset_session() {
    set_array(Vec::new());
    set_is_sorting(false);
    set_delay_ms(DEFAULT_DELAY_MS);
    set_with_delay(true);
    set_status(String::new());
}

// =============================================================================
// Tests
// =============================================================================
