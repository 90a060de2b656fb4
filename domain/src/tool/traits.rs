//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Rejects missing required parameters, unknown parameters, and values whose
/// JSON type does not match the parameter's type hint. `null` counts as
/// absent.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            match call.arguments.get(&param.name) {
                None | Some(serde_json::Value::Null) => {
                    if param.required {
                        return Err(format!(
                            "Missing required parameter '{}' for tool '{}'",
                            param.name, definition.name
                        ));
                    }
                }
                Some(value) => {
                    if !type_matches(&param.param_type, value) {
                        return Err(format!(
                            "Parameter '{}' for tool '{}' must be of type {}",
                            param.name, definition.name, param.param_type
                        ));
                    }
                }
            }
        }

        for arg_name in call.arguments.keys() {
            if definition.parameter(arg_name).is_none() {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}

fn type_matches(param_type: &str, value: &serde_json::Value) -> bool {
    match param_type {
        "string" | "url" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::{RiskLevel, ToolParameter};

    fn definition() -> ToolDefinition {
        ToolDefinition::new("search_github", "Search GitHub", RiskLevel::Low)
            .with_parameter(ToolParameter::new("query", "Search query", true))
            .with_parameter(ToolParameter::new("sort", "Sort order", false))
    }

    #[test]
    fn test_validator_missing_required() {
        let result = DefaultToolValidator.validate(&ToolCall::new("search_github"), &definition());
        assert!(result.unwrap_err().contains("Missing required parameter 'query'"));
    }

    #[test]
    fn test_validator_null_counts_as_missing() {
        let call = ToolCall::new("search_github").with_arg("query", serde_json::Value::Null);
        assert!(DefaultToolValidator.validate(&call, &definition()).is_err());
    }

    #[test]
    fn test_validator_unknown_param() {
        let call = ToolCall::new("search_github")
            .with_arg("query", "tokio")
            .with_arg("order", "asc");
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("Unknown parameter 'order'"));
    }

    #[test]
    fn test_validator_type_mismatch() {
        let call = ToolCall::new("search_github").with_arg("query", 42);
        let result = DefaultToolValidator.validate(&call, &definition());
        assert!(result.unwrap_err().contains("must be of type string"));
    }

    #[test]
    fn test_validator_valid_call() {
        let call = ToolCall::new("search_github")
            .with_arg("query", "tokio")
            .with_arg("sort", "updated");
        assert!(DefaultToolValidator.validate(&call, &definition()).is_ok());

        let without_optional = ToolCall::new("search_github").with_arg("query", "tokio");
        assert!(DefaultToolValidator.validate(&without_optional, &definition()).is_ok());
    }
}
