//! Tool domain module
//!
//! This module defines how the search tools are described to, and invoked by,
//! an external agent host.
//!
//! # Overview
//!
//! Every tool is defined by a [`ToolDefinition`] (name, parameters, risk level),
//! invoked via a [`ToolCall`], and returns a [`ToolResult`] whose output is the
//! tool's JSON record.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (catalogue)  │    │ (invocation) │    │ (record)     │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        ├─ aliases: "search_reddit_r" → "search_subreddit"
//!        └─ tools:   "search_subreddit" → ToolDefinition
//! ```
//!
//! # Aliases
//!
//! Models often guess generic names (`web_search`, `read_file`). The alias
//! table in [`ToolSpec`] maps those to canonical names without another model
//! round-trip; canonical names always win over aliases.
//!
//! # Risk Levels
//!
//! | Risk | Tools |
//! |------|-------|
//! | **Low** | all searches, `fetch_url_content`, `read_from_file`, `get_current_data_files` |
//! | **High** | `write_to_file` |
//!
//! [`ToolSpec::read_only`] drops the high-risk tools for hosts that must not
//! touch local state.

pub mod entities;
pub mod provider;
pub mod traits;
pub mod value_objects;

pub use entities::{RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use provider::{ProviderError, ToolProvider};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
