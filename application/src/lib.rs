//! Application layer for scout
//!
//! This crate contains the port definitions the host-facing adapters
//! implement and the immutable settings value threaded through every tool
//! call. It depends only on the domain layer.

pub mod config;
pub mod ports;

// Re-export commonly used types
pub use config::{Endpoints, GoogleCredentials, HttpSettings, ToolSettings};
pub use ports::{tool_executor::ToolExecutorPort, tool_schema::ToolSchemaPort};
