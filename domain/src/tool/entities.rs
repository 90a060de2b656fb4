//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Risk level of a tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk - read-only operations (searches, URL fetch, file reads)
    Low,
    /// High risk - operations that modify local state (file writes)
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool that an agent host can call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "search_github")
    pub name: String,
    /// Natural-language description shown to the model
    pub description: String,
    /// Risk level of this tool
    pub risk_level: RiskLevel,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint ("string", "url", "number", "boolean")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_level.is_mutating()
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Catalogue of tools exposed to the host
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: HashMap<String, ToolDefinition>,
    /// Alias → canonical name mapping (e.g. "search_reddit_r" → "search_subreddit")
    aliases: HashMap<String, String>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    /// Register a single alias mapping (builder pattern)
    pub fn register_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Register multiple aliases at once (builder pattern)
    pub fn register_aliases(
        mut self,
        mappings: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        for (alias, canonical) in mappings {
            self.aliases.insert(alias.into(), canonical.into());
        }
        self
    }

    /// Resolve an alias to its canonical name (aliases only, not canonical names).
    ///
    /// Aliases whose target is not registered resolve to `None`, so a read-only
    /// spec never resolves `write_file`.
    pub fn resolve_alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(name)
            .map(|s| s.as_str())
            .filter(|canonical| self.tools.contains_key(*canonical))
    }

    /// Resolve a name: canonical names win over aliases
    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        if self.tools.contains_key(name) {
            Some(name)
        } else {
            self.resolve_alias(name)
        }
    }

    /// Get tool definition by canonical name or alias
    pub fn get_resolved(&self, name: &str) -> Option<&ToolDefinition> {
        self.resolve(name).and_then(|canonical| self.tools.get(canonical))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// All definitions sorted by name
    pub fn sorted(&self) -> Vec<&ToolDefinition> {
        let mut tools: Vec<&ToolDefinition> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn high_risk_tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().filter(|t| t.is_high_risk())
    }

    pub fn low_risk_tools(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values().filter(|t| !t.is_high_risk())
    }

    /// A copy of this spec without high-risk tools (aliases are kept and
    /// stop resolving once their target is gone)
    pub fn read_only(&self) -> Self {
        Self {
            tools: self
                .tools
                .iter()
                .filter(|(_, t)| !t.is_high_risk())
                .map(|(n, t)| (n.clone(), t.clone()))
                .collect(),
            aliases: self.aliases.clone(),
        }
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call (canonical or alias)
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Build a call from a JSON object of arguments
    pub fn from_json(
        tool_name: impl Into<String>,
        arguments: serde_json::Value,
    ) -> Result<Self, String> {
        match arguments {
            serde_json::Value::Object(map) => Ok(Self {
                tool_name: tool_name.into(),
                arguments: map.into_iter().collect(),
            }),
            serde_json::Value::Null => Ok(Self::new(tool_name)),
            other => Err(format!("Arguments must be a JSON object, got: {}", other)),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Same call addressed to another tool name (used after alias resolution)
    pub fn renamed(&self, tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: self.arguments.clone(),
        }
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional, non-empty string argument
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get_string(key).filter(|s| !s.is_empty())
    }

    /// Get an optional i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> ToolSpec {
        ToolSpec::new()
            .register(ToolDefinition::new("search_subreddit", "Search a subreddit", RiskLevel::Low))
            .register(ToolDefinition::new("read_from_file", "Read file", RiskLevel::Low))
            .register(ToolDefinition::new("write_to_file", "Write file", RiskLevel::High))
            .register_alias("search_reddit_r", "search_subreddit")
            .register_alias("read_file", "read_from_file")
            .register_alias("write_file", "write_to_file")
    }

    #[test]
    fn test_risk_level() {
        assert!(!RiskLevel::Low.is_mutating());
        assert!(RiskLevel::High.is_mutating());
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("search_github", "Search repositories", RiskLevel::Low)
            .with_parameter(ToolParameter::new("query", "Search query", true))
            .with_parameter(ToolParameter::new("sort", "Sort order", false));

        assert_eq!(tool.name, "search_github");
        assert!(!tool.is_high_risk());
        assert_eq!(tool.parameters.len(), 2);
        assert_eq!(tool.parameters[0].name, "query");
        assert_eq!(tool.parameters[0].param_type, "string");
        assert!(tool.parameter("sort").is_some());
        assert!(tool.parameter("order").is_none());
    }

    #[test]
    fn test_tool_spec() {
        let spec = sample_spec();

        assert!(spec.get("read_from_file").is_some());
        assert!(spec.get("unknown").is_none());
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.high_risk_tools().count(), 1);
        assert_eq!(spec.low_risk_tools().count(), 2);

        let names: Vec<&str> = spec.sorted().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["read_from_file", "search_subreddit", "write_to_file"]);
    }

    #[test]
    fn test_tool_spec_aliases() {
        let spec = sample_spec();

        assert_eq!(spec.resolve_alias("search_reddit_r"), Some("search_subreddit"));
        assert_eq!(spec.resolve_alias("search_subreddit"), None);
        assert_eq!(spec.resolve("search_subreddit"), Some("search_subreddit"));
        assert_eq!(spec.resolve("read_file"), Some("read_from_file"));
        assert_eq!(spec.resolve("unknown"), None);
        assert_eq!(
            spec.get_resolved("search_reddit_r").unwrap().name,
            "search_subreddit"
        );
    }

    #[test]
    fn test_canonical_name_takes_priority_over_alias() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("fetch_url_content", "Fetch", RiskLevel::Low))
            .register(ToolDefinition::new("fetch", "Another fetch", RiskLevel::Low))
            .register_alias("fetch", "fetch_url_content");

        assert_eq!(spec.resolve("fetch"), Some("fetch"));
        assert_eq!(spec.get_resolved("fetch").unwrap().name, "fetch");
    }

    #[test]
    fn test_get_is_not_affected_by_aliases() {
        let spec = sample_spec();
        assert!(spec.get("read_file").is_none());
    }

    #[test]
    fn test_read_only_spec_drops_high_risk_tools_and_their_aliases() {
        let spec = sample_spec().read_only();

        assert!(spec.get("write_to_file").is_none());
        assert_eq!(spec.resolve("write_file"), None);
        assert_eq!(spec.resolve("read_file"), Some("read_from_file"));
        assert_eq!(spec.high_risk_tools().count(), 0);
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("search_github")
            .with_arg("query", "tokio")
            .with_arg("sort", "");

        assert_eq!(call.get_string("query"), Some("tokio"));
        assert_eq!(call.require_string("query").unwrap(), "tokio");
        assert!(call.require_string("missing").is_err());
        assert_eq!(call.get_non_empty("sort"), None);
        assert_eq!(call.renamed("github").tool_name, "github");
    }

    #[test]
    fn test_tool_call_from_json() {
        let call =
            ToolCall::from_json("search_reddit", serde_json::json!({"query": "rust", "sort": "new"}))
                .unwrap();
        assert_eq!(call.get_string("sort"), Some("new"));

        assert!(ToolCall::from_json("search_reddit", serde_json::Value::Null)
            .unwrap()
            .arguments
            .is_empty());
        assert!(ToolCall::from_json("search_reddit", serde_json::json!(["rust"])).is_err());
    }
}
