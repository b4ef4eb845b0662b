//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line at the top of the screen.
///
/// Single line for the application name, dataset name and record counts.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Used in layout calculations for the status bar at the bottom of the
/// screen. Single line for filter summary and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines.
///
/// Includes border and text input area.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Width of the sidebar holding the filter and hidden-columns panels.
///
/// Wide enough for the longest column label plus a checkbox marker
/// inside panel borders.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Height of the facet filter panel (border + one line per facet).
pub const FILTER_PANEL_HEIGHT: u16 = 4;

/// Width percentage for help overlay popup.
///
/// Percentage of screen width (0-100) for the help overlay modal.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
///
/// Percentage of screen height (0-100) for the help overlay modal.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Narrowest a record column may render before the window drops it.
pub const MIN_RECORD_COLUMN_WIDTH: u16 = 10;

/// Widest a record column may grow; longer cell text is truncated.
pub const MAX_RECORD_COLUMN_WIDTH: u16 = 28;

/// Input event poll interval in milliseconds.
///
/// The loop wakes at this interval even without input; key handling
/// itself is immediate.
pub const POLL_INTERVAL_MS: u64 = 250;
