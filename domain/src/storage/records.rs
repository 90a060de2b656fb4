//! Records returned by the file-store tools.
//!
//! Each record is tagged with `status`: `"success"` plus the payload fields,
//! or `"error"` plus an `error` message.

use serde::{Deserialize, Serialize};

/// Status-tagged outcome of a file-store operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome<T> {
    Success(T),
    Error { error: String },
}

impl<T> FileOutcome<T> {
    pub fn error(message: impl Into<String>) -> Self {
        FileOutcome::Error {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FileOutcome::Error { error } => Some(error),
            FileOutcome::Success(_) => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FileOutcome::Success(value) => Some(value),
            FileOutcome::Error { .. } => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for FileOutcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FileOutcome::Success(value),
            Err(e) => FileOutcome::error(e.to_string()),
        }
    }
}

/// A file written to or read from the data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Sanitized base name
    pub file_name: String,
    /// Full path inside the data directory
    pub path: String,
    /// File content (reads only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content length in characters
    pub size: usize,
}

/// Names of the regular files present in the data directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileListing {
    pub files: Vec<String>,
}

/// Record of `write_to_file` / `read_from_file`
pub type FileResponse = FileOutcome<FileRecord>;

/// Record of `get_current_data_files`
pub type ListingResponse = FileOutcome<FileListing>;
