//! The printer record: one machine's full attribute set.

use crate::model::Column;
use serde::{Deserialize, Serialize};

/// A single printer's specification record.
///
/// Loaded once from the dataset and never mutated afterwards. Identity is
/// the numeric `id`; every other field is display data. The wire format
/// uses camelCase keys (`buildVolume`, `diyKit`, ...).
///
/// All specification fields are free text on purpose: build volumes and
/// temperature limits come from vendor datasheets in wildly inconsistent
/// shapes, and the table displays them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Printer {
    /// Unique numeric identifier. Never displayed and never searched.
    pub id: u32,
    /// Model name, e.g. "Prusa i3 MK3S+".
    pub title: String,
    /// Build volume, e.g. "250 x 210 x 210 mm".
    pub build_volume: String,
    /// Supported layer height range.
    pub layer_height: String,
    /// Maximum travel speed.
    pub max_travel_speed: String,
    /// Maximum hotend and bed temperatures.
    pub max_temperatures: String,
    /// Controller board and firmware notes.
    pub controller: String,
    /// Filament diameter.
    pub filament_diameter: String,
    /// Whether the machine is sold as a DIY kit.
    pub diy_kit: bool,
    /// Whether the machine is sold pre-built.
    pub built_printer: bool,
}

impl Printer {
    /// Iterate the searchable free-text fields of this record.
    ///
    /// Search only ever inspects string-typed fields; `id` and the two
    /// availability flags are excluded by construction.
    pub fn string_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.build_volume.as_str(),
            self.layer_height.as_str(),
            self.max_travel_speed.as_str(),
            self.max_temperatures.as_str(),
            self.controller.as_str(),
            self.filament_diameter.as_str(),
        ]
        .into_iter()
    }

    /// Text value of a column, or `None` for the boolean columns.
    pub fn text_value(&self, column: Column) -> Option<&str> {
        match column {
            Column::Title => Some(&self.title),
            Column::BuildVolume => Some(&self.build_volume),
            Column::LayerHeight => Some(&self.layer_height),
            Column::MaxTravelSpeed => Some(&self.max_travel_speed),
            Column::MaxTemperatures => Some(&self.max_temperatures),
            Column::Controller => Some(&self.controller),
            Column::FilamentDiameter => Some(&self.filament_diameter),
            Column::DiyKit | Column::BuiltPrinter => None,
        }
    }

    /// Flag value of a column, or `None` for the text columns.
    pub fn flag_value(&self, column: Column) -> Option<bool> {
        match column {
            Column::DiyKit => Some(self.diy_kit),
            Column::BuiltPrinter => Some(self.built_printer),
            _ => None,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
