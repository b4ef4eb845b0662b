//! Pure grid projection: records × visible columns → display cells.
//!
//! The table widget renders exactly what this module computes. Keeping
//! the projection pure makes the cell contract (badge when a flag is
//! set, empty cell when it is clear, raw text otherwise) testable
//! without a terminal.

use crate::model::{Column, Printer};

/// One display cell of the comparison grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Raw text value of a text column.
    Text(String),
    /// Labelled badge for a set flag.
    Badge(&'static str),
    /// Empty cell for a clear flag.
    Empty,
}

impl Cell {
    /// The cell's text as rendered. Badges render their label; empty
    /// cells render nothing.
    pub fn as_text(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Badge(label) => label,
            Cell::Empty => "",
        }
    }

    /// Whether this cell is a badge.
    pub fn is_badge(&self) -> bool {
        matches!(self, Cell::Badge(_))
    }
}

/// One grid row: an attribute heading plus one cell per record.
///
/// The grid is transposed relative to the records: attributes run down
/// the screen and records run across it, so a handful of machines can
/// be compared side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    /// The attribute this row displays.
    pub column: Column,
    /// Row heading text.
    pub label: &'static str,
    /// One cell per record, in record order.
    pub cells: Vec<Cell>,
}

/// A fully projected comparison grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// Rows in column display order, restricted to the visible columns.
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Number of record columns in the grid.
    pub fn record_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }
}

/// Project records and columns into a grid.
///
/// Stateless and total: the output is fully determined by the inputs,
/// and every record/column combination produces exactly one cell.
pub fn project(records: &[Printer], columns: &[Column]) -> Grid {
    let rows = columns
        .iter()
        .map(|&column| GridRow {
            column,
            label: column.label(),
            cells: records
                .iter()
                .map(|record| project_cell(record, column))
                .collect(),
        })
        .collect();
    Grid { rows }
}

/// Project one record/column combination into its cell.
fn project_cell(record: &Printer, column: Column) -> Cell {
    match (record.flag_value(column), column.badge_label()) {
        (Some(true), Some(badge)) => Cell::Badge(badge),
        (Some(_), _) => Cell::Empty,
        (None, _) => Cell::Text(record.text_value(column).unwrap_or_default().to_string()),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
