//! Tool implementations for the search agent
//!
//! This module provides the concrete tools an agent host can call: six
//! search APIs, a URL fetcher, and a flat-file store.
//!
//! ## Layout
//!
//! - `web`: search and fetch tools (async, `reqwest`)
//! - `file`: the data-directory store (synchronous `std::fs`)
//! - `http`: the shared [`WebClient`] and [`WebError`]
//! - `record`: folding tool records into [`ToolResult`](scout_domain::ToolResult)s
//!
//! ## Providers
//!
//! - `builtin`: every tool above, always available, lowest priority
//!
//! ## Aliases
//!
//! | Alias | Canonical |
//! |-------|-----------|
//! | `search_reddit_r` | `search_subreddit` |
//! | `google`, `web_search` | `search_google` |
//! | `fetch`, `web_fetch` | `fetch_url_content` |
//! | `write_file` | `write_to_file` |
//! | `read_file` | `read_from_file` |
//! | `list_files` | `get_current_data_files` |

pub mod builtin;
pub mod file;
pub mod http;
pub mod record;
pub mod web;

mod executor;
mod registry;
mod schema;

pub use builtin::BuiltinProvider;
pub use executor::LocalToolExecutor;
pub use file::{FileStore, StoreError};
pub use http::{WebClient, WebError};
pub use registry::{RegistryStats, ToolRegistry};
pub use schema::JsonSchemaToolConverter;

use scout_domain::tool::entities::ToolSpec;

/// Alias → canonical name mappings registered in [`default_tool_spec`]
pub const TOOL_ALIASES: &[(&str, &str)] = &[
    ("search_reddit_r", web::SEARCH_SUBREDDIT),
    ("google", web::SEARCH_GOOGLE),
    ("web_search", web::SEARCH_GOOGLE),
    ("fetch", web::FETCH_URL_CONTENT),
    ("web_fetch", web::FETCH_URL_CONTENT),
    ("write_file", file::WRITE_TO_FILE),
    ("read_file", file::READ_FROM_FILE),
    ("list_files", file::GET_CURRENT_DATA_FILES),
];

/// Create the default tool specification with all available tools
pub fn default_tool_spec() -> ToolSpec {
    ToolSpec::new()
        .register(web::search_google_definition())
        .register(web::search_github_definition())
        .register(web::search_reddit_definition())
        .register(web::search_subreddit_definition())
        .register(web::search_stackoverflow_definition())
        .register(web::search_wikipedia_definition())
        .register(web::fetch_url_content_definition())
        .register(file::write_to_file_definition())
        .register(file::read_from_file_definition())
        .register(file::get_current_data_files_definition())
        .register_aliases(TOOL_ALIASES.iter().copied())
}

/// Get definitions for low-risk (read-only) tools only
pub fn read_only_tool_spec() -> ToolSpec {
    default_tool_spec().read_only()
}
