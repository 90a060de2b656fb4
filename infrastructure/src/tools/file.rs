//! File store tools: write_to_file, read_from_file, get_current_data_files
//!
//! All three operate on flat files inside one data directory. Names are
//! reduced to their base name first, so a caller can never address a path
//! outside that directory.

use scout_domain::storage::{
    file_name::{FileName, FileNameError},
    records::{FileListing, FileOutcome, FileRecord, FileResponse, ListingResponse},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Tool name constants
pub const WRITE_TO_FILE: &str = "write_to_file";
pub const READ_FROM_FILE: &str = "read_from_file";
pub const GET_CURRENT_DATA_FILES: &str = "get_current_data_files";

pub fn write_to_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        WRITE_TO_FILE,
        "Write content to a file in the data directory. Overwrites an existing file with the same name.",
        RiskLevel::High,
    )
    .with_parameter(
        ToolParameter::new("file_name", "Name of the file (directory parts are ignored)", true)
            .with_type("string"),
    )
    .with_parameter(
        ToolParameter::new("content", "Content to write to the file", true).with_type("string"),
    )
}

pub fn read_from_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        READ_FROM_FILE,
        "Read the content of a file in the data directory",
        RiskLevel::Low,
    )
    .with_parameter(
        ToolParameter::new("file_name", "Name of the file to read", true).with_type("string"),
    )
}

pub fn get_current_data_files_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_CURRENT_DATA_FILES,
        "List the names of the files currently in the data directory",
        RiskLevel::Low,
    )
}

/// Why a file-store operation failed
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid file name or content")]
    InvalidInput,

    #[error(transparent)]
    InvalidName(#[from] FileNameError),

    #[error("File not found")]
    NotFound,

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Flat-file store rooted at one data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `content` verbatim, creating the data directory on demand.
    pub fn write(&self, file_name: &str, content: &str) -> Result<FileRecord, StoreError> {
        if file_name.is_empty() || content.is_empty() {
            return Err(StoreError::InvalidInput);
        }

        let name = FileName::sanitize(file_name)?;
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(&name);
        fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");

        Ok(FileRecord {
            file_name: name.to_string(),
            path: path.display().to_string(),
            content: None,
            size: content.chars().count(),
        })
    }

    pub fn read(&self, file_name: &str) -> Result<FileRecord, StoreError> {
        let name = FileName::sanitize(file_name)?;
        let path = self.root.join(&name);

        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound,
            _ => StoreError::Io(e),
        })?;

        Ok(FileRecord {
            file_name: name.to_string(),
            path: path.display().to_string(),
            size: content.chars().count(),
            content: Some(content),
        })
    }

    /// Sorted names of the regular files in the data directory.
    ///
    /// A data directory that does not exist yet lists as empty.
    pub fn list(&self) -> Result<FileListing, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(FileListing::default()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort();

        Ok(FileListing { files })
    }
}

fn log_failure<T>(op: &str, outcome: &Result<T, StoreError>) {
    if let Err(e) = outcome {
        tracing::warn!(op, error = %e, "File store operation failed");
    }
}

/// `write_to_file` record
pub fn write_to_file(store: &FileStore, file_name: &str, content: &str) -> FileResponse {
    let outcome = store.write(file_name, content);
    log_failure(WRITE_TO_FILE, &outcome);
    FileOutcome::from(outcome)
}

/// `read_from_file` record
pub fn read_from_file(store: &FileStore, file_name: &str) -> FileResponse {
    let outcome = store.read(file_name);
    log_failure(READ_FROM_FILE, &outcome);
    FileOutcome::from(outcome)
}

/// `get_current_data_files` record
pub fn get_current_data_files(store: &FileStore) -> ListingResponse {
    let outcome = store.list();
    log_failure(GET_CURRENT_DATA_FILES, &outcome);
    FileOutcome::from(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("data"))
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let written = store.write("notes.md", "# Notes\nhéllo").unwrap();
        assert_eq!(written.file_name, "notes.md");
        assert_eq!(written.size, 13);
        assert!(written.content.is_none());
        assert!(store.root().join("notes.md").is_file());

        let read = store.read("notes.md").unwrap();
        assert_eq!(read.content.as_deref(), Some("# Notes\nhéllo"));
        assert_eq!(read.size, 13);
        assert_eq!(read.path, written.path);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.write("a.txt", "first").unwrap();
        store.write("a.txt", "second").unwrap();

        assert_eq!(store.read("a.txt").unwrap().content.as_deref(), Some("second"));
    }

    #[test]
    fn test_traversal_is_reduced_to_base_name() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let record = store.write("../../escape.txt", "x").unwrap();
        assert_eq!(record.file_name, "escape.txt");
        assert!(store.root().join("escape.txt").is_file());
        assert!(!dir.path().join("escape.txt").exists());

        let record = store.write(r"..\windows\style.txt", "y").unwrap();
        assert_eq!(record.file_name, "style.txt");
    }

    #[test]
    fn test_write_rejects_empty_input() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(matches!(store.write("", "x"), Err(StoreError::InvalidInput)));
        assert!(matches!(store.write("a.txt", ""), Err(StoreError::InvalidInput)));
        assert!(matches!(store.write("dir/", "x"), Err(StoreError::InvalidName(_))));
        assert!(matches!(store.write("..", "x"), Err(StoreError::InvalidName(_))));
        assert!(!store.root().exists());
    }

    #[test]
    fn test_read_errors() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.read("").unwrap_err().to_string(), "Invalid file name");
        assert_eq!(store.read("missing.txt").unwrap_err().to_string(), "File not found");
    }

    #[test]
    fn test_list_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.list().unwrap().files.is_empty());

        store.write("b.txt", "b").unwrap();
        store.write("a.txt", "a").unwrap();
        fs::create_dir_all(store.root().join("subdir")).unwrap();

        assert_eq!(store.list().unwrap().files, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let value = serde_json::to_value(write_to_file(&store, "", "x")).unwrap();
        assert_eq!(value, json!({"status": "error", "error": "Invalid file name or content"}));

        let value = serde_json::to_value(write_to_file(&store, "r.txt", "data")).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["size"], 4);

        let value = serde_json::to_value(read_from_file(&store, "nope")).unwrap();
        assert_eq!(value, json!({"status": "error", "error": "File not found"}));

        let value = serde_json::to_value(get_current_data_files(&store)).unwrap();
        assert_eq!(value, json!({"status": "success", "files": ["r.txt"]}));
    }
}
