//! Shared record fixtures for unit tests.

use crate::model::Printer;

/// A fully populated record with plausible spec-sheet text and both
/// availability flags clear.
pub fn printer(id: u32, title: &str) -> Printer {
    Printer {
        id,
        title: title.to_string(),
        build_volume: "200 x 200 x 200 mm".to_string(),
        layer_height: "0.1 - 0.3 mm".to_string(),
        max_travel_speed: "150 mm/s".to_string(),
        max_temperatures: "Hotend 260 C, Bed 100 C".to_string(),
        controller: "Generic 32-bit".to_string(),
        filament_diameter: "1.75 mm".to_string(),
        diy_kit: false,
        built_printer: false,
    }
}

/// A record sold as a DIY kit only.
pub fn kit(id: u32, title: &str) -> Printer {
    Printer {
        diy_kit: true,
        built_printer: false,
        ..printer(id, title)
    }
}

/// A record sold pre-built only.
pub fn built(id: u32, title: &str) -> Printer {
    Printer {
        diy_kit: false,
        built_printer: true,
        ..printer(id, title)
    }
}
