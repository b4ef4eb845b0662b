//! Display columns: the printer attributes the table can show.

use std::fmt;

/// One displayable attribute of a [`Printer`](crate::model::Printer).
///
/// Covers every record field except the numeric id. Declaration order is
/// the display order and is stable; hiding and restoring never reorders
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Model name.
    Title,
    /// Build volume text.
    BuildVolume,
    /// Layer height text.
    LayerHeight,
    /// Maximum travel speed text.
    MaxTravelSpeed,
    /// Maximum temperatures text.
    MaxTemperatures,
    /// Controller board text.
    Controller,
    /// Filament diameter text.
    FilamentDiameter,
    /// DIY-kit availability flag.
    DiyKit,
    /// Pre-built availability flag.
    BuiltPrinter,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 9] = [
        Column::Title,
        Column::BuildVolume,
        Column::LayerHeight,
        Column::MaxTravelSpeed,
        Column::MaxTemperatures,
        Column::Controller,
        Column::FilamentDiameter,
        Column::DiyKit,
        Column::BuiltPrinter,
    ];

    /// Human-readable heading shown in the attribute column.
    pub const fn label(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::BuildVolume => "Build Volume",
            Column::LayerHeight => "Layer Height",
            Column::MaxTravelSpeed => "Max Travel Speed",
            Column::MaxTemperatures => "Max Temperatures",
            Column::Controller => "Controller",
            Column::FilamentDiameter => "Filament Diameter",
            Column::DiyKit => "DIY Kit",
            Column::BuiltPrinter => "Built Printer",
        }
    }

    /// Badge text shown in a flag column's cell when the flag is set.
    ///
    /// The built-printer badge carries the full label; the kit badge is
    /// the short "DIY". Text columns have no badge.
    pub const fn badge_label(self) -> Option<&'static str> {
        match self {
            Column::DiyKit => Some("DIY"),
            Column::BuiltPrinter => Some("Built Printer"),
            _ => None,
        }
    }

    /// Whether this column holds a boolean flag rather than text.
    pub const fn is_flag(self) -> bool {
        matches!(self, Column::DiyKit | Column::BuiltPrinter)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "column_tests.rs"]
mod tests;
