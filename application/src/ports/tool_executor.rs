//! Tool Executor port
//!
//! Defines the interface a host uses to run tools (searches, URL fetch,
//! file store).

use async_trait::async_trait;
use scout_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// This port defines how a host executes tools.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available tools
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a tool is available (canonical names and aliases)
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get_resolved(name).is_some()
    }

    /// Get the definition of a specific tool (canonical names and aliases)
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get_resolved(name)
    }

    /// Get names of all available tools, sorted
    fn available_tools(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tool_spec().names().collect();
        names.sort_unstable();
        names
    }

    /// Execute a tool call asynchronously
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Execute a tool call synchronously (blocking)
    ///
    /// For hosts without an async runtime of their own.
    fn execute_sync(&self, call: &ToolCall) -> ToolResult;
}
