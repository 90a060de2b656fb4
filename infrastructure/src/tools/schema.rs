//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema, plus the agent manifest a host registers in one step.

use scout_application::ports::tool_schema::ToolSchemaPort;
use scout_domain::agent::profile::AgentProfile;
use scout_domain::tool::entities::{ToolDefinition, ToolSpec};
use std::collections::BTreeMap;

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"url"` → `"string"` with `"format": "uri"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    /// Agent profile, tool schemas and resolvable aliases in one document.
    ///
    /// ```json
    /// {"agent": {...}, "tools": [...], "aliases": {"google": "search_google"}}
    /// ```
    pub fn agent_manifest(&self, profile: &AgentProfile, spec: &ToolSpec) -> serde_json::Value {
        let aliases: BTreeMap<&str, &str> = spec
            .aliases()
            .filter(|(alias, _)| spec.resolve_alias(alias).is_some())
            .collect();

        serde_json::json!({
            "agent": profile,
            "tools": self.all_tools_schema(spec),
            "aliases": aliases,
        })
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "string" | "url" => "string",
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            let mut prop = serde_json::Map::new();
            prop.insert("type".to_string(), serde_json::json!(schema_type));
            if param.param_type == "url" {
                prop.insert("format".to_string(), serde_json::json!("uri"));
            }
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.sorted()
            .into_iter()
            .map(|t| self.tool_to_schema(t))
            .collect()
    }

    fn low_risk_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.low_risk_tools().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
