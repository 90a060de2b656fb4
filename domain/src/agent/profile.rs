//! Agent profile exported alongside the tool manifest

use serde::{Deserialize, Serialize};

/// Name, description and standing instruction of an agent that uses the tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub description: String,
    pub instruction: String,
}

impl AgentProfile {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instruction: instruction.into(),
        }
    }

    /// The default search agent
    pub fn search_agent() -> Self {
        Self::new(
            "root_agent",
            "A helpful search agent that can search the web and answer questions.",
            "You are an advanced search agent. Use the search tools to search the web, GitHub, \
             Reddit, Stack Overflow, and Wikipedia. You can also fetch content from URLs and \
             read/write files in the data directory. Always try to use the tools to get the most \
             accurate and up-to-date information.",
        )
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::search_agent()
    }
}
