//! # sort-tui
//!
//! Animated sorting algorithm visualizer for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Sorting and animation are split into three layers. The engine turns an
//! algorithm run into a deterministic step script without touching shared
//! state. The driver owns the live array and replays a script against it,
//! one step at a time, under a busy latch. The UI observes driver
//! snapshots through session signals:
//!
//! ```text
//! engine::script → AnimationDriver::run → session signals → render effect
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (SortKind, SortStep, StepDelay)
//! - [`engine`] - Sorting algorithms compiled to step scripts
//! - [`driver`] - Step playback, pacing, busy latch, worker thread
//! - [`state`] - Reactive session signals for the UI
//! - [`render`] - Differential bar chart renderer
//! - [`input`] - Keyboard mapping to UI actions

pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod state;
pub mod types;
pub mod util;

// Re-export commonly used items
pub use types::*;

pub use engine::{script, SortScript};

pub use driver::{spawn_run, AnimationDriver, RunEvent, RunHandle};

pub use error::RunError;

pub use render::BarChart;

pub use input::{convert_key_event, poll_action, Action};
