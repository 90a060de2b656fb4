//! Base-name sanitization for file-store names

use thiserror::Error;

/// Why a caller-supplied name cannot be used in the data directory
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("Invalid file name")]
    Empty,

    #[error("Invalid file name: '{0}' has no base name")]
    NoBaseName(String),
}

/// A file name reduced to its final path component.
///
/// Directory components are stripped on both `/` and `\`, so
/// `../../etc/passwd` becomes `passwd`. A name whose final component is
/// empty, `.` or `..` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    pub fn sanitize(raw: &str) -> Result<Self, FileNameError> {
        if raw.is_empty() {
            return Err(FileNameError::Empty);
        }

        let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
        match base {
            "" | "." | ".." => Err(FileNameError::NoBaseName(raw.to_string())),
            _ => Ok(Self(base.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for FileName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
