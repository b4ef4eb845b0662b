//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod hidden_columns;
pub mod search_input;

// Re-export for convenience
pub use app_state::{AppState, FacetChoice, FocusPane};
pub use hidden_columns::HiddenColumns;
pub use search_input::SearchBox;
