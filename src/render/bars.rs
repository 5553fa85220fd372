//! BarChart - differential bar renderer
//!
//! Each array slot becomes one column of cells. Bar fill is tracked in
//! eighth-cell units and painted with the lower block glyphs, so a chart
//! thirty rows tall resolves two hundred forty distinct bar heights.
//!
//! Drawing is diffed against the previous frame: a column is repainted
//! only when its geometry or fill changed. Any change to the terminal
//! size or the column count forces a clear and a full repaint.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::types::Value;

// =============================================================================
// TYPES
// =============================================================================

/// Bar fill color (steel blue).
const BAR_COLOR: Color = Color::Rgb {
    r: 70,
    g: 130,
    b: 180,
};

/// Header tint while a run is in flight.
const BUSY_COLOR: Color = Color::Yellow;

/// Partial-fill glyphs indexed by remaining eighths (index 0 is unused).
const PARTIALS: [char; 8] = [' ', '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}'];

/// Full cell glyph.
const FULL: char = '\u{2588}';

/// Key-binding line pinned to the bottom row.
const HELP: &str = "1-6 sort   r reset   d delay   +/- speed   [ ] length   esc cancel   q quit";

/// Screen rows reserved around the chart: header, spacer, spacer, help.
const CHROME_ROWS: u16 = 4;

/// Left and right margin columns.
const MARGIN: u16 = 1;

/// One rendered column: where it sits and how tall its bar is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    /// Offset of the column's left edge inside the chart area.
    x: u16,
    /// Column width in cells.
    width: u16,
    /// Bar fill in eighth-cells, measured from the chart floor.
    eighths: u32,
}

/// Everything the previous draw painted, kept for diffing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    width: u16,
    height: u16,
    header: String,
    busy: bool,
    columns: Vec<Column>,
}

/// Differential bar chart renderer.
///
/// Owns a reusable output buffer. Every [`draw`](BarChart::draw) queues
/// the changed cells into the buffer and flushes it to stdout in one
/// locked write.
pub struct BarChart {
    out: Vec<u8>,
    previous: Option<Frame>,
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Splits `area_width` cells into `count` column slots.
///
/// Columns get an even width with a one-cell gap when the area is at
/// least twice the column count, and pack edge to edge otherwise. The
/// row is centered in the leftover space. Columns that fall past the
/// right edge are clipped from the result.
fn column_slots(count: usize, area_width: u16) -> Vec<(u16, u16)> {
    if count == 0 || area_width == 0 {
        return Vec::new();
    }
    let count = count.min(u16::MAX as usize) as u16;
    let gap: u16 = if area_width / 2 >= count { 1 } else { 0 };
    let width = ((area_width - gap * (count - 1)) / count).max(1);
    let used = width * count + gap * (count - 1);
    let origin = area_width.saturating_sub(used) / 2;

    let mut slots = Vec::with_capacity(count as usize);
    for i in 0..count {
        let x = origin + i * (width + gap);
        if x >= area_width {
            break;
        }
        slots.push((x, width.min(area_width - x)));
    }
    slots
}

/// Converts a value to a bar fill in eighth-cells.
///
/// The largest value spans the full chart height; everything else
/// scales proportionally. Positive values always show at least one
/// eighth so small bars stay visible. Negative values render empty.
fn fill_eighths(value: Value, max: Value, rows: u16) -> u32 {
    if value <= 0 || max <= 0 || rows == 0 {
        return 0;
    }
    let span = rows as u64 * 8;
    let fill = (value as u64 * span / max as u64) as u32;
    fill.max(1)
}

/// Picks the glyph for one cell of a bar.
///
/// `row_from_bottom` is 0 at the chart floor. A cell is full when the
/// fill clears its top, partial when the fill ends inside it, and blank
/// above that.
fn cell_glyph(eighths: u32, row_from_bottom: u16) -> char {
    let base = row_from_bottom as u32 * 8;
    if eighths >= base + 8 {
        FULL
    } else if eighths > base {
        PARTIALS[(eighths - base) as usize]
    } else {
        ' '
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl BarChart {
    pub fn new() -> Self {
        BarChart {
            out: Vec::with_capacity(16384),
            previous: None,
        }
    }

    /// Forgets the previous frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Paints `values` as bars with `header` on the top row.
    ///
    /// `busy` tints the header while a run is in flight. `size` is the
    /// terminal size in (columns, rows); callers pass the tracked
    /// viewport so a resize forces the full repaint here.
    pub fn draw(
        &mut self,
        values: &[Value],
        header: &str,
        busy: bool,
        size: (u16, u16),
    ) -> io::Result<()> {
        let (width, height) = size;
        let frame = compose_frame(values, header, busy, width, height);

        let full_repaint = needs_full_repaint(self.previous.as_ref(), &frame);

        if full_repaint {
            queue!(self.out, Clear(ClearType::All))?;
            self.queue_header(&frame)?;
            self.queue_help(&frame)?;
            for column in &frame.columns {
                self.queue_column(column, &frame)?;
            }
        } else if let Some(prev) = self.previous.take() {
            if prev.header != frame.header || prev.busy != frame.busy {
                self.queue_header(&frame)?;
            }
            for (column, old) in frame.columns.iter().zip(&prev.columns) {
                if column != old {
                    self.queue_column(column, &frame)?;
                }
            }
        }

        self.previous = Some(frame);
        self.flush_stdout()
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Header row: bold, tinted while busy, padded to the full width.
    fn queue_header(&mut self, frame: &Frame) -> io::Result<()> {
        let limit = frame.width.saturating_sub(MARGIN * 2) as usize;
        let text = clip_line(&frame.header, limit);
        queue!(
            self.out,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            MoveTo(MARGIN, 0),
            SetAttribute(Attribute::Bold)
        )?;
        if frame.busy {
            queue!(self.out, SetForegroundColor(BUSY_COLOR))?;
        }
        queue!(
            self.out,
            Print(&text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    /// Help row: dim, pinned to the last terminal row.
    fn queue_help(&mut self, frame: &Frame) -> io::Result<()> {
        if frame.height < 2 {
            return Ok(());
        }
        let limit = frame.width.saturating_sub(MARGIN * 2) as usize;
        let text = clip_line(HELP, limit);
        queue!(
            self.out,
            MoveTo(MARGIN, frame.height - 1),
            SetAttribute(Attribute::Dim),
            Print(&text),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    /// Repaints one column top to bottom, blanks included, so a bar
    /// that shrank loses its old cells.
    fn queue_column(&mut self, column: &Column, frame: &Frame) -> io::Result<()> {
        let rows = chart_rows(frame.height);
        if rows == 0 || column.width == 0 {
            return Ok(());
        }
        queue!(self.out, SetForegroundColor(BAR_COLOR))?;
        for row in 0..rows {
            let from_bottom = rows - 1 - row;
            let glyph = cell_glyph(column.eighths, from_bottom);
            let run: String = std::iter::repeat(glyph).take(column.width as usize).collect();
            queue!(
                self.out,
                MoveTo(MARGIN + column.x, 2 + row),
                Print(run)
            )?;
        }
        queue!(self.out, ResetColor)?;
        Ok(())
    }

    /// Hands the queued bytes to stdout in one locked write.
    fn flush_stdout(&mut self) -> io::Result<()> {
        if self.out.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.out)?;
        stdout.flush()?;
        self.out.clear();
        Ok(())
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Chart rows left once the header, spacers, and help line are taken.
fn chart_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

/// Clips `text` to at most `limit` characters, never splitting a
/// multi-byte character.
fn clip_line(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// True when `frame` cannot be diffed against what was painted last.
fn needs_full_repaint(previous: Option<&Frame>, frame: &Frame) -> bool {
    match previous {
        Some(prev) => {
            prev.width != frame.width
                || prev.height != frame.height
                || prev.columns.len() != frame.columns.len()
        }
        None => true,
    }
}

/// Builds the frame description for one draw.
fn compose_frame(values: &[Value], header: &str, busy: bool, width: u16, height: u16) -> Frame {
    let rows = chart_rows(height);
    let area = width.saturating_sub(MARGIN * 2);
    let max = values.iter().copied().max().unwrap_or(0);
    let columns = column_slots(values.len(), area)
        .into_iter()
        .zip(values)
        .map(|((x, width), &value)| Column {
            x,
            width,
            eighths: fill_eighths(value, max, rows),
        })
        .collect();
    Frame {
        width,
        height,
        header: header.to_string(),
        busy,
        columns,
    }
}

// =============================================================================
// Tests
// =============================================================================
