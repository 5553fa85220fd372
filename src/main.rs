//! sort-tui binary - terminal sorting visualizer.
//!
//! Wires the pieces together: a shuffled array owned by the
//! [`AnimationDriver`], a render effect that repaints the bar chart
//! whenever a session signal changes, and a 60fps input loop that maps
//! keys to driver calls and drains worker events back into the signals.

use std::io;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use spark_signals::effect;

use sort_tui::driver::{spawn_run, AnimationDriver, RunEvent, RunHandle};
use sort_tui::error::RunError;
use sort_tui::input::{poll_action, Action};
use sort_tui::render::BarChart;
use sort_tui::state::session;
use sort_tui::types::{SortKind, Value};
use sort_tui::util;

/// Input poll timeout (~60fps).
const TICK: Duration = Duration::from_millis(16);

/// Array length bounds for the `[` / `]` keys.
const MIN_LENGTH: usize = 10;
const MAX_LENGTH: usize = 200;
const LENGTH_STEP: usize = 10;

/// Upper bound for the `+` key.
const MAX_DELAY_MS: u64 = 1024;

fn main() {
    env_logger::init();

    let length = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(n) => n.clamp(MIN_LENGTH, MAX_LENGTH),
            Err(_) => {
                log::error!("invalid array length {arg:?}, expected a number");
                std::process::exit(1);
            }
        },
        None => session::DEFAULT_LENGTH,
    };

    if let Err(error) = run(length) {
        log::error!("terminal error: {error}");
        std::process::exit(1);
    }
}

// =============================================================================
// TERMINAL SESSION
// =============================================================================

/// Raw mode plus alternate screen, restored on drop.
struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(TerminalSession { active: true })
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restore the terminal on panic or early return (best effort)
        let _ = self.exit();
    }
}

// =============================================================================
// EVENT LOOP
// =============================================================================

fn run(initial_length: usize) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;

    let driver = AnimationDriver::new(util::shuffled_sequence(initial_length));
    let mut length = initial_length;

    session::reset_session();
    session::set_array(driver.snapshot());
    session::set_status("press 1-6 to sort");
    session::set_viewport(terminal::size()?);

    // The ONE render effect: reruns whenever a session signal it reads
    // changes, repainting only the columns that moved.
    let mut chart = BarChart::new();
    let stop_render = effect(move || {
        let values = session::array();
        let status = session::status();
        let busy = session::is_sorting();
        let viewport = session::viewport();
        let pace = if session::with_delay() {
            format!("{}ms", session::delay_ms())
        } else {
            "off".to_string()
        };
        let header = format!("{status}   {} bars   delay {pace}", values.len());
        if let Err(error) = chart.draw(&values, &header, busy, viewport) {
            log::error!("render failed: {error}");
        }
    });

    let mut active: Option<(SortKind, RunHandle)> = None;

    loop {
        match poll_action(TICK)? {
            Some(Action::Quit) => {
                driver.cancel();
                break;
            }
            Some(action) => handle_action(action, &driver, &mut length, &mut active),
            None => {}
        }

        drain_events(&driver, &mut active);
    }

    if let Some((_, handle)) = active.take() {
        handle.join();
    }
    stop_render();
    terminal_session.exit()?;
    Ok(())
}

fn handle_action(
    action: Action,
    driver: &AnimationDriver,
    length: &mut usize,
    active: &mut Option<(SortKind, RunHandle)>,
) {
    match action {
        Action::Sort(kind) => start_run(kind, driver, active),
        Action::Reset => {
            reshuffle(driver, *length, active);
        }
        Action::Grow => {
            let next = (*length + LENGTH_STEP).min(MAX_LENGTH);
            if reshuffle(driver, next, active) {
                *length = next;
            }
        }
        Action::Shrink => {
            let next = length.saturating_sub(LENGTH_STEP).max(MIN_LENGTH);
            if reshuffle(driver, next, active) {
                *length = next;
            }
        }
        Action::ToggleDelay => session::set_with_delay(!session::with_delay()),
        Action::DelayUp => {
            session::set_delay_ms((session::delay_ms() * 2).clamp(1, MAX_DELAY_MS));
        }
        Action::DelayDown => {
            session::set_delay_ms((session::delay_ms() / 2).max(1));
        }
        Action::Cancel => driver.cancel(),
        Action::Resize(width, height) => session::set_viewport((width, height)),
        Action::Quit => {}
    }
}

/// Starts a worker run. A busy driver rejects the spawn synchronously
/// and the rejection lands in the status line.
///
/// A pending handle counts as busy even before the worker thread has
/// taken the latch; only one handle is tracked at a time.
fn start_run(kind: SortKind, driver: &AnimationDriver, active: &mut Option<(SortKind, RunHandle)>) {
    if active.is_some() {
        session::set_status(RunError::Busy.to_string());
        return;
    }
    match spawn_run(driver, kind, session::step_delay()) {
        Ok(handle) => {
            session::set_is_sorting(true);
            session::set_status(format!("{kind} running"));
            *active = Some((kind, handle));
        }
        Err(error) => session::set_status(error.to_string()),
    }
}

/// Replaces the array with a fresh shuffle of `length` values.
/// Returns false when a run is pending or active and the old array stays.
fn reshuffle(
    driver: &AnimationDriver,
    length: usize,
    active: &Option<(SortKind, RunHandle)>,
) -> bool {
    if active.is_some() {
        session::set_status(RunError::Busy.to_string());
        return false;
    }
    match driver.reset(util::shuffled_sequence(length)) {
        Ok(()) => {
            session::set_array(driver.snapshot());
            session::set_status("shuffled - press 1-6 to sort");
            true
        }
        Err(error) => {
            session::set_status(error.to_string());
            false
        }
    }
}

/// Pulls pending worker events into the session signals.
///
/// Step snapshots are coalesced per tick: only the newest one reaches
/// the array signal, so a fast run repaints at frame rate instead of
/// once per step. Every snapshot was still published in order by the
/// driver; coalescing here is purely a display decision.
fn drain_events(driver: &AnimationDriver, active: &mut Option<(SortKind, RunHandle)>) {
    let mut latest: Option<Vec<Value>> = None;
    let mut finished = false;

    if let Some((kind, handle)) = active.as_ref() {
        while let Some(event) = handle.try_next() {
            match event {
                RunEvent::Step(snapshot) => latest = Some(snapshot),
                RunEvent::Finished(sorted) => {
                    latest = Some(sorted);
                    session::set_status(format!("{kind} done"));
                    finished = true;
                }
                RunEvent::Failed(error) => {
                    latest = Some(driver.snapshot());
                    session::set_status(error.to_string());
                    finished = true;
                }
            }
        }
    }

    if let Some(snapshot) = latest {
        session::set_array(snapshot);
    }
    if finished {
        session::set_is_sorting(false);
        if let Some((_, handle)) = active.take() {
            handle.join();
        }
    }
}
