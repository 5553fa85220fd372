//! Render Module - terminal output
//!
//! One renderer lives here: the [`BarChart`], which paints the observed
//! array as a row of vertical bars plus a header and a key-binding line.
//! It keeps the previous frame's geometry and repaints only the columns
//! that changed, so a single swap step redraws two bars, not the screen.

mod bars;

pub use bars::BarChart;
