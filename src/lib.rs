//! printab
//!
//! TUI application for comparing 3D printer specifications side by side.
//!
//! Follows a Pure Core / Impure Shell architecture: `model`, `dataset`
//! and `state` are pure and fully testable without a terminal; `view`
//! owns the terminal and the event loop.

pub mod config;
pub mod dataset;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_support;
