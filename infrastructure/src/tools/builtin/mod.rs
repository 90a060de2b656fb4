//! Built-in tool provider module
//!
//! Provides the BuiltinProvider, which exposes the in-process search, fetch
//! and file-store tools to the registry.

mod provider;

pub use provider::{BUILTIN_PRIORITY, BuiltinProvider};
