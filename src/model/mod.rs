//! Domain model types (pure).
//!
//! All types in this module are pure data. Records are immutable after
//! load; columns and filters are small copyable values.

pub mod column;
pub mod facet;
pub mod key_action;
pub mod printer;

// Re-export for convenience
pub use column::Column;
pub use facet::{FacetFilter, TriState};
pub use key_action::KeyAction;
pub use printer::Printer;
