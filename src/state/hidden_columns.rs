//! Hidden-column bookkeeping.
//!
//! The hidden list is ordered (most recently hidden last) so the panel
//! can show hides in the order the user made them. The visible
//! projection is recomputed on every read; with nine columns there is
//! nothing worth caching.

use crate::model::Column;

/// Ordered, duplicate-free list of columns excluded from the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenColumns {
    hidden: Vec<Column>,
}

impl HiddenColumns {
    /// Empty hidden list: every column visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide a column by appending it to the list.
    ///
    /// A column that is already hidden is left where it is, so the list
    /// can never hold duplicates.
    pub fn hide(&mut self, column: Column) {
        if !self.hidden.contains(&column) {
            self.hidden.push(column);
        }
    }

    /// Restore a column by removing its first occurrence.
    ///
    /// Restoring a column that is not hidden is a no-op.
    pub fn restore(&mut self, column: Column) {
        if let Some(pos) = self.hidden.iter().position(|&hidden| hidden == column) {
            self.hidden.remove(pos);
        }
    }

    /// Columns currently hidden, in the order they were hidden.
    pub fn hidden(&self) -> &[Column] {
        &self.hidden
    }

    /// Whether a column is currently hidden.
    pub fn contains(&self, column: Column) -> bool {
        self.hidden.contains(&column)
    }

    /// Visible columns: display order minus the hidden set.
    pub fn visible(&self) -> Vec<Column> {
        Column::ALL
            .iter()
            .copied()
            .filter(|column| !self.contains(*column))
            .collect()
    }

    /// Number of hidden columns.
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    /// Whether nothing is hidden.
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "hidden_columns_tests.rs"]
mod tests;
