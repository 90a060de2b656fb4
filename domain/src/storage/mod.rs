//! File store domain module
//!
//! The file store keeps flat files in one data directory. This module holds
//! the pure parts: [`FileName`] reduces a caller-supplied name to its base
//! name, and [`records`] defines the status-tagged records the store tools
//! return.

pub mod file_name;
pub mod records;

pub use file_name::{FileName, FileNameError};
pub use records::{FileListing, FileOutcome, FileRecord, FileResponse, ListingResponse};
