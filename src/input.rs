//! Input Module - terminal events translated to visualizer actions
//!
//! The event loop polls here with a short timeout so it can keep draining
//! worker snapshots between key presses. Raw crossterm events are converted
//! into [`Action`] values; everything the visualizer can do has a key.
//!
//! # Bindings
//!
//! - `1`-`6` - start Bubble / Insertion / Quick / Selection / Merge / Heap
//! - `r` - reset to a fresh shuffle
//! - `d` - toggle the step delay on/off
//! - `+`/`-` - double/halve the step delay
//! - `[`/`]` - shrink/grow the array (when idle)
//! - `Esc` - cancel the active run
//! - `q` or Ctrl+C - quit

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers,
};

use crate::types::SortKind;

// =============================================================================
// ACTION ENUM
// =============================================================================

/// One user intention, decoded from a raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start a run of the given algorithm.
    Sort(SortKind),
    /// Replace the array with a fresh shuffle.
    Reset,
    /// Flip the with-delay flag for subsequent runs.
    ToggleDelay,
    /// Double the step delay.
    DelayUp,
    /// Halve the step delay.
    DelayDown,
    /// Grow the array and reshuffle.
    Grow,
    /// Shrink the array and reshuffle.
    Shrink,
    /// Cancel the active run.
    Cancel,
    /// Leave the session.
    Quit,
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
}

// =============================================================================
// POLLING
// =============================================================================

/// Poll for the next action, waiting at most `timeout`.
///
/// Returns `Ok(None)` when no event arrived in time or the event carries no
/// binding.
pub fn poll_action(timeout: Duration) -> std::io::Result<Option<Action>> {
    if !poll(timeout)? {
        return Ok(None);
    }
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)),
        CrosstermEvent::Resize(w, h) => Ok(Some(Action::Resize(w, h))),
        _ => Ok(None),
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm KeyEvent to an Action.
///
/// Press and repeat both count (holding `-` keeps speeding up); releases
/// are dropped so terminals reporting both edges don't double-fire.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Char('1') => Some(Action::Sort(SortKind::Bubble)),
        KeyCode::Char('2') => Some(Action::Sort(SortKind::Insertion)),
        KeyCode::Char('3') => Some(Action::Sort(SortKind::Quick)),
        KeyCode::Char('4') => Some(Action::Sort(SortKind::Selection)),
        KeyCode::Char('5') => Some(Action::Sort(SortKind::Merge)),
        KeyCode::Char('6') => Some(Action::Sort(SortKind::Heap)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('d') => Some(Action::ToggleDelay),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::DelayUp),
        KeyCode::Char('-') => Some(Action::DelayDown),
        KeyCode::Char(']') => Some(Action::Grow),
        KeyCode::Char('[') => Some(Action::Shrink),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
