//! HTTP configuration from TOML (`[http]` section)

use scout_application::config::{DEFAULT_FETCH_TIMEOUT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};

/// Raw HTTP configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// User agent sent with every request
    pub user_agent: String,
    /// Timeout for search API requests
    pub timeout_secs: u64,
    /// Timeout for `fetch_url_content`
    pub fetch_timeout_secs: u64,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
        }
    }
}
