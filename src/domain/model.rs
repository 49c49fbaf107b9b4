use crate::utils::error::{PackagerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One packaging run: which file to compress and where the archive goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveJob {
    pub source_path: String,
    pub archive_path: String,
}

impl ArchiveJob {
    pub fn new(source_path: impl Into<String>, archive_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            archive_path: archive_path.into(),
        }
    }

    /// Name the entry is stored under: the base name of the source path,
    /// directory components stripped.
    pub fn entry_name(&self) -> Result<&str> {
        Path::new(&self.source_path)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PackagerError::InvalidConfigValueError {
                field: "source".to_string(),
                value: self.source_path.clone(),
                reason: "Path has no file name component".to_string(),
            })
    }
}
