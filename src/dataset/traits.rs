//! Dataset store trait and error types

use crate::dataset::OrganizationRecord;
use thiserror::Error;

/// Errors that can occur while reading or writing the dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed dataset {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Trait for dataset backends
///
/// A store holds exactly one dataset. Writing replaces it entirely;
/// reading returns it whole.
pub trait DatasetStore: Send + Sync {
    /// Replaces the stored dataset with `records`, preserving their order
    fn write_records(&self, records: &[OrganizationRecord]) -> DatasetResult<()>;

    /// Reads the whole stored dataset
    ///
    /// Fails if nothing has been stored yet.
    fn read_records(&self) -> DatasetResult<Vec<OrganizationRecord>>;

    /// Human-readable location of the dataset, for logging
    fn location(&self) -> String;
}
