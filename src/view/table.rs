//! The comparison table widget.
//!
//! Renders the projected grid transposed: attribute rows run down the
//! screen, one column per record across it. Record columns are sized to
//! their widest cell and windowed horizontally; the window start is the
//! state's record offset.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{MAX_RECORD_COLUMN_WIDTH, MIN_RECORD_COLUMN_WIDTH};
use crate::view::grid::{project, Grid};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Gap between record columns, in cells.
const COLUMN_GAP: u16 = 2;

/// Comparison table widget.
pub struct TablePane<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> TablePane<'a> {
    /// Create a new TablePane widget.
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for TablePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == FocusPane::Table;
        let grid = project(self.state.records(), &self.state.visible_columns());

        let border_style = if focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };

        let count = grid.record_count();
        let label_width = heading_width(&grid);
        let offset = self.state.record_offset.min(count.saturating_sub(1));
        let available = area
            .width
            .saturating_sub(2) // borders
            .saturating_sub(label_width);
        let widths = window_widths(&grid, offset, available);

        let title = if count == 0 {
            " Printers ".to_string()
        } else {
            format!(
                " Printers {}-{} of {} ",
                offset + 1,
                offset + widths.len(),
                count
            )
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        if grid.rows.is_empty() {
            let message =
                Paragraph::new(Line::from(Span::styled("All columns hidden", self.palette.muted)))
                    .block(block);
            message.render(area, buf);
            return;
        }
        if count == 0 {
            let message = Paragraph::new(Line::from(Span::styled(
                "No printers match the current search and filters",
                self.palette.muted,
            )))
            .block(block);
            message.render(area, buf);
            return;
        }

        let mut lines = Vec::with_capacity(grid.rows.len());
        for (row_index, row) in grid.rows.iter().enumerate() {
            let selected = focused && row_index == self.state.selected_row;
            let mut spans = Vec::with_capacity(1 + widths.len() * 2);

            let heading_style = if selected {
                self.palette.selection
            } else {
                self.palette.heading
            };
            spans.push(Span::styled(pad(row.label, label_width as usize), heading_style));

            for (offset_index, &width) in widths.iter().enumerate() {
                let cell = &row.cells[offset + offset_index];
                let cell_style = if selected {
                    self.palette.selection
                } else if cell.is_badge() {
                    self.palette.badge
                } else {
                    ratatui::style::Style::default()
                };
                spans.push(Span::styled(fit(cell.as_text(), width as usize), cell_style));
                spans.push(Span::raw(" ".repeat(COLUMN_GAP as usize)));
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

// ===== Width Computation =====

/// Display width of the heading column: the widest label plus a gap.
fn heading_width(grid: &Grid) -> u16 {
    let widest = grid
        .rows
        .iter()
        .map(|row| row.label.width())
        .max()
        .unwrap_or(0);
    widest as u16 + COLUMN_GAP
}

/// Natural width of one record column: its widest cell, clamped.
fn record_width(grid: &Grid, record: usize) -> u16 {
    let widest = grid
        .rows
        .iter()
        .map(|row| row.cells[record].as_text().width())
        .max()
        .unwrap_or(0) as u16;
    widest.clamp(MIN_RECORD_COLUMN_WIDTH, MAX_RECORD_COLUMN_WIDTH)
}

/// Widths of the record columns that fit in `available` cells, starting
/// at `offset`. Always yields at least one column when records exist.
fn window_widths(grid: &Grid, offset: usize, available: u16) -> Vec<u16> {
    let count = grid.record_count();
    let mut widths = Vec::new();
    let mut used: u16 = 0;

    for record in offset..count {
        let width = record_width(grid, record);
        let next = used + width + COLUMN_GAP;
        if next > available && !widths.is_empty() {
            break;
        }
        widths.push(width);
        used = next;
        if used > available {
            break;
        }
    }

    widths
}

// ===== Text Fitting =====

/// Pad `text` with spaces to an exact display width.
fn pad(text: &str, width: usize) -> String {
    let deficit = width.saturating_sub(text.width());
    let mut padded = String::with_capacity(text.len() + deficit);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(deficit));
    padded
}

/// Fit `text` into `width` display cells: pad when short, truncate with
/// a "..." marker when long. Safe on multi-byte and wide characters.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return pad(text, width);
    }
    if width <= 3 {
        return take_width(text, width);
    }

    let truncated = take_width(text, width - 3);
    pad(&format!("{truncated}..."), width)
}

/// Longest prefix of `text` that fits in `width` display cells.
fn take_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > width {
            break;
        }
        out.push(ch);
        used += char_width;
    }
    out
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
