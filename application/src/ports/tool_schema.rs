//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to describe them to a
//! host" (infrastructure). Hosts differ in how they register tools; this port
//! produces one provider-neutral JSON Schema form they can all consume.

use scout_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to host format (JSON Schema).
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to JSON Schema array (sorted by name).
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;

    /// Convert low-risk tools only to JSON Schema array (sorted by name).
    fn low_risk_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
