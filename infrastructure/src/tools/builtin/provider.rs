//! Built-in tool provider
//!
//! Exposes the [`LocalToolExecutor`] tools through the [`ToolProvider`]
//! seam, so they can be merged with host-side providers in a
//! [`ToolRegistry`](crate::tools::ToolRegistry).

use async_trait::async_trait;
use scout_application::config::ToolSettings;
use scout_application::ports::tool_executor::ToolExecutorPort;
use scout_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    provider::{ProviderError, ToolProvider},
    value_objects::ToolResult,
};

use crate::tools::LocalToolExecutor;
use crate::tools::http::WebError;

/// Priority for the built-in provider (lowest, used as fallback)
pub const BUILTIN_PRIORITY: i32 = -100;

/// Built-in tool provider
#[derive(Debug, Clone)]
pub struct BuiltinProvider {
    executor: LocalToolExecutor,
}

impl BuiltinProvider {
    /// Create a new built-in provider with all tools
    pub fn new(settings: ToolSettings) -> Result<Self, WebError> {
        Ok(Self::from_executor(LocalToolExecutor::new(settings)?))
    }

    /// Create a built-in provider with only read-only tools
    pub fn read_only(settings: ToolSettings) -> Result<Self, WebError> {
        Ok(Self::from_executor(LocalToolExecutor::read_only(settings)?))
    }

    pub fn from_executor(executor: LocalToolExecutor) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &LocalToolExecutor {
        &self.executor
    }
}

#[async_trait]
impl ToolProvider for BuiltinProvider {
    fn id(&self) -> &str {
        "builtin"
    }

    fn display_name(&self) -> &str {
        "Built-in Tools"
    }

    fn priority(&self) -> i32 {
        BUILTIN_PRIORITY
    }

    async fn is_available(&self) -> bool {
        // Built-in tools are always available
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(self.executor.tool_spec().all().cloned().collect())
    }

    fn aliases(&self) -> Vec<(String, String)> {
        let spec = self.executor.tool_spec();
        spec.aliases()
            .filter(|(alias, _)| spec.resolve_alias(alias).is_some())
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect()
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.executor.execute(call).await
    }
}
