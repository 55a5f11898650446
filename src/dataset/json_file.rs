//! JSON file dataset store
//!
//! The dataset is a single UTF-8 JSON array, pretty-printed with four-space
//! indentation. Writes truncate and rewrite the file in place; a reader
//! running concurrently with a writer may observe a partial document.

use crate::dataset::traits::{DatasetError, DatasetResult, DatasetStore};
use crate::dataset::OrganizationRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Dataset stored as one JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DatasetError {
        DatasetError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> DatasetError {
        DatasetError::Json {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DatasetStore for JsonFileStore {
    fn write_records(&self, records: &[OrganizationRecord]) -> DatasetResult<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .map_err(|e| self.json_error(e))?;

        std::fs::write(&self.path, buf).map_err(|e| self.io_error(e))
    }

    fn read_records(&self) -> DatasetResult<Vec<OrganizationRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|e| self.json_error(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
