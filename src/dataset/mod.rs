//! Dataset module for persisting harvested organizations
//!
//! This module handles:
//! - The persisted record format and its fixed field order
//! - The store interface shared by the crawler and the read endpoint
//! - The JSON file backend

mod json_file;
mod record;
mod traits;

pub use json_file::JsonFileStore;
pub use record::OrganizationRecord;
pub use traits::{DatasetError, DatasetResult, DatasetStore};

use crate::config::OutputConfig;

/// Opens the dataset store described by the output configuration
pub fn open_store(config: &OutputConfig) -> JsonFileStore {
    JsonFileStore::new(&config.dataset_path)
}
