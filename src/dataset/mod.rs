//! The record store: a fixed list of printer records loaded once.
//!
//! The dataset ships inside the binary and can be replaced by a
//! user-supplied JSON file with the same `{ "data": [...] }` envelope.
//! After load the list is immutable. Queries walk it linearly and return
//! owned copies in dataset order; at table scale (tens of records) this
//! is far below perceptible cost.

pub mod search;

pub use search::{filter_records, record_matches, SearchParam};

use crate::model::Printer;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Dataset bundled into the binary at compile time.
const BUNDLED_JSON: &str = include_str!("../../data/printers.json");

/// Name reported for the bundled dataset.
const BUNDLED_NAME: &str = "bundled";

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read a dataset file from disk.
    #[error("failed to read dataset {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset contents did not decode as the expected JSON envelope.
    #[error("invalid dataset JSON in {name}: {reason}")]
    Parse {
        /// Dataset name (file name, or the bundled marker).
        name: String,
        /// Decode failure details.
        reason: String,
    },
}

/// On-disk envelope: `{ "data": [ ...records ] }`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    data: Vec<Printer>,
}

/// The immutable in-memory record store.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    records: Vec<Printer>,
}

impl Dataset {
    /// Load the dataset bundled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_NAME, BUNDLED_JSON)
    }

    /// Load a dataset from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("dataset");
        Self::from_json(name, &contents)
    }

    /// Decode a dataset from a JSON string.
    pub fn from_json(name: &str, json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile =
            serde_json::from_str(json).map_err(|err| DatasetError::Parse {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        debug!(dataset = name, records = file.data.len(), "Dataset decoded");
        Ok(Self {
            name: name.to_string(),
            records: file.data,
        })
    }

    /// Build a dataset directly from records (fixtures, benchmarks).
    pub fn from_records(name: &str, records: Vec<Printer>) -> Self {
        Self {
            name: name.to_string(),
            records,
        }
    }

    /// Dataset display name: the file name, or `bundled`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full record list in dataset order.
    pub fn records(&self) -> &[Printer] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Answer a query: every record for an absent or blank search,
    /// otherwise the matching subset, always in dataset order.
    pub fn query(&self, search: Option<&SearchParam>) -> Vec<Printer> {
        filter_records(&self.records, search)
    }
}

/// Serialize records the way a query response would carry them: a JSON
/// array of camelCase objects.
pub fn to_json(records: &[Printer]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

// ===== Tests =====

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
