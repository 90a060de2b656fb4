//! Tool Registry
//!
//! The [`ToolRegistry`] aggregates multiple tool providers and implements
//! [`ToolExecutorPort`]. It handles tool discovery, alias merging, provider
//! resolution, and execution routing based on priority.
//!
//! # Usage
//!
//! ```ignore
//! use scout_infrastructure::tools::{BuiltinProvider, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new()
//!     .register(BuiltinProvider::new(settings)?);   // priority: -100
//!
//! // Discover available tools from all providers
//! registry.discover().await?;
//!
//! // Aliases resolve to canonical tools
//! assert!(registry.has_tool("web_search"));
//!
//! // Execute tools (automatically routed to correct provider)
//! let call = ToolCall::new("search_github").with_arg("query", "tokio");
//! let result = registry.execute(&call).await;
//! ```
//!
//! # Discovery Process
//!
//! 1. Providers are sorted by priority (highest first)
//! 2. Each provider's `discover_tools()` is called
//! 3. Tools are registered, with higher-priority providers winning conflicts
//! 4. Provider aliases are merged; an alias never shadows a canonical name
//! 5. A unified `ToolSpec` is built for the host

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use scout_application::ports::tool_executor::ToolExecutorPort;
use scout_domain::tool::{
    entities::{ToolCall, ToolSpec},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};

use super::executor::run_blocking;

/// Tool registry that aggregates multiple providers
pub struct ToolRegistry {
    /// Registered providers
    providers: Vec<Arc<dyn ToolProvider>>,
    /// Tool name -> provider ID mapping (cached after discovery)
    tool_mapping: HashMap<String, String>,
    /// Merged tool specification
    tool_spec: ToolSpec,
    /// Whether discovery has been run
    discovered: bool,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tool_mapping: HashMap::new(),
            tool_spec: ToolSpec::new(),
            discovered: false,
        }
    }

    /// Register a tool provider
    pub fn register<P: ToolProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self.discovered = false; // Invalidate cache
        self
    }

    /// Register a tool provider (Arc version)
    pub fn register_arc(mut self, provider: Arc<dyn ToolProvider>) -> Self {
        self.providers.push(provider);
        self.discovered = false;
        self
    }

    /// Discover tools from all providers
    ///
    /// This must be called before using the registry. Fails only when no
    /// provider contributed a single tool.
    pub async fn discover(&mut self) -> Result<(), ProviderError> {
        // Sort providers by priority (descending)
        self.providers.sort_by_key(|p| std::cmp::Reverse(p.priority()));

        let mut tool_spec = ToolSpec::new();
        let mut tool_mapping = HashMap::new();
        let mut aliases: Vec<(String, String)> = Vec::new();

        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::debug!(provider = provider.id(), "Provider not available, skipping");
                continue;
            }

            match provider.discover_tools().await {
                Ok(tools) => {
                    for tool in tools {
                        // Only add if not already registered (higher priority wins)
                        if !tool_mapping.contains_key(&tool.name) {
                            tracing::debug!(
                                tool = %tool.name,
                                provider = provider.id(),
                                "Registered tool"
                            );
                            tool_mapping.insert(tool.name.clone(), provider.id().to_string());
                            tool_spec = tool_spec.register(tool);
                        } else {
                            tracing::trace!(
                                tool = %tool.name,
                                provider = provider.id(),
                                "Tool already registered by higher priority provider"
                            );
                        }
                    }
                    for (alias, canonical) in provider.aliases() {
                        if !aliases.iter().any(|(a, _)| *a == alias) {
                            aliases.push((alias, canonical));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        error = %e,
                        "Failed to discover tools from provider"
                    );
                }
            }
        }

        if tool_mapping.is_empty() {
            return Err(ProviderError::DiscoveryFailed(
                "no provider offered any tools".to_string(),
            ));
        }

        let aliases = aliases
            .into_iter()
            .filter(|(alias, _)| !tool_mapping.contains_key(alias));
        self.tool_spec = tool_spec.register_aliases(aliases);
        self.tool_mapping = tool_mapping;
        self.discovered = true;

        Ok(())
    }

    /// Get the provider for a specific canonical tool name
    fn provider_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolProvider>> {
        let provider_id = self.tool_mapping.get(tool_name)?;
        self.providers.iter().find(|p| p.id() == provider_id)
    }

    /// Get a list of registered provider IDs
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Get statistics about registered tools
    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_provider = HashMap::new();
        for provider_id in self.tool_mapping.values() {
            *tools_per_provider.entry(provider_id.clone()).or_insert(0) += 1;
        }

        RegistryStats {
            total_providers: self.providers.len(),
            total_tools: self.tool_mapping.len(),
            total_aliases: self.tool_spec.aliases().count(),
            tools_per_provider,
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_providers: usize,
    pub total_tools: usize,
    pub total_aliases: usize,
    pub tools_per_provider: HashMap<String, usize>,
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.discovered {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Registry not initialized. Call discover() first."),
            );
        }

        let Some(canonical) = self.tool_spec.resolve(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::unknown_tool(&call.tool_name),
            );
        };
        tracing::trace!(requested = %call.tool_name, tool = canonical, "Routing tool call");

        match self.provider_for(canonical) {
            Some(provider) if canonical == call.tool_name => provider.execute(call).await,
            Some(provider) => provider.execute(&call.renamed(canonical)).await,
            None => ToolResult::failure(
                &call.tool_name,
                ToolError::unknown_tool(&call.tool_name),
            ),
        }
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        run_blocking(&call.tool_name, self.execute(call))
    }
}
