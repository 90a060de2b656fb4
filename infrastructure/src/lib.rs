//! Infrastructure layer for scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP search tools, the file store,
//! the tool registry and configuration file loading.

pub mod config;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use tools::{
    BuiltinProvider, FileStore, JsonSchemaToolConverter, LocalToolExecutor, RegistryStats,
    StoreError, ToolRegistry, WebClient, WebError, default_tool_spec, read_only_tool_spec,
};
