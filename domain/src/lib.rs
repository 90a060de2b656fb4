//! Domain layer for scout
//!
//! This crate contains the value types shared by every layer: tool
//! definitions and results, the records produced by each search tool,
//! fetched page content, and file-store records. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A tool is a named, described, parameterized function that an external
//! agent host can invoke. [`ToolSpec`] is the catalogue, [`ToolCall`] the
//! invocation and [`ToolResult`] the host-facing outcome.
//!
//! ## Records
//!
//! Every tool produces a flat record ([`SearchResponse`], [`PageContent`],
//! [`FileResponse`], [`ListingResponse`]). On failure a record degrades to its
//! identifying fields plus an `error` string; it never becomes a Rust error.

pub mod agent;
pub mod core;
pub mod page;
pub mod search;
pub mod storage;
pub mod tool;

// Re-export commonly used types
pub use agent::profile::AgentProfile;
pub use core::{
    outcome::Outcome,
    string::{ELLIPSIS, truncate_with_ellipsis},
};
pub use page::{PageBody, PageContent};
pub use search::entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource};
pub use storage::{
    file_name::{FileName, FileNameError},
    records::{FileListing, FileOutcome, FileRecord, FileResponse, ListingResponse},
};
pub use tool::{
    entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    provider::{ProviderError, ToolProvider},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
