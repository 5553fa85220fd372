//! State Module - the reactive session state the visualizer renders from
//!
//! One system lives here:
//!
//! - **Session** - the observed array, the IsSorting flag, pacing
//!   configuration, and the status message line
//!
//! All of it is thread-local signal state; the render effect subscribes by
//! reading, the event loop writes. Worker threads never touch it directly -
//! their snapshots arrive over a channel and are written in by the loop.

pub mod session;
