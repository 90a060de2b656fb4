//! Tool settings: the explicit configuration of every tool call.
//!
//! [`ToolSettings`] replaces ambient module-level constants (shared headers,
//! timeouts, API keys) with one immutable value built once at startup and
//! passed by reference to each tool. Infrastructure maps its config file into
//! this type; tests build it directly and point [`Endpoints`] at a mock
//! server.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser-like user agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout for the search APIs.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request timeout for `fetch_url_content`.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Outbound HTTP behaviour shared by all tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub user_agent: String,
    /// Timeout for search API requests
    pub timeout: Duration,
    /// Timeout for arbitrary URL fetches
    pub fetch_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Base URLs of the search APIs (scheme + host, no trailing path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Google Custom Search JSON API
    pub google: String,
    /// GitHub REST API
    pub github: String,
    /// Reddit public JSON endpoints
    pub reddit: String,
    /// Stack Exchange API
    pub stackexchange: String,
    /// English Wikipedia (MediaWiki API lives under `/w/api.php`)
    pub wikipedia: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            google: "https://www.googleapis.com".to_string(),
            github: "https://api.github.com".to_string(),
            reddit: "https://www.reddit.com".to_string(),
            stackexchange: "https://api.stackexchange.com".to_string(),
            wikipedia: "https://en.wikipedia.org".to_string(),
        }
    }
}

impl Endpoints {
    /// Every endpoint served from one base URL (a local mock server)
    pub fn all_at(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            google: base.clone(),
            github: base.clone(),
            reddit: base.clone(),
            stackexchange: base.clone(),
            wikipedia: base,
        }
    }
}

/// Google Custom Search credentials (`SEARCH_API_KEY`, `GOOGLE_CSE_ID`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleCredentials {
    pub api_key: Option<String>,
    pub cse_id: Option<String>,
}

impl GoogleCredentials {
    pub fn new(api_key: impl Into<String>, cse_id: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            cse_id: Some(cse_id.into()),
        }
    }

    /// `(api_key, cse_id)` when both are present and non-empty
    pub fn pair(&self) -> Option<(&str, &str)> {
        let api_key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let cse_id = self.cse_id.as_deref().filter(|c| !c.is_empty())?;
        Some((api_key, cse_id))
    }
}

/// Everything a tool call may depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    pub http: HttpSettings,
    pub endpoints: Endpoints,
    pub google: GoogleCredentials,
    /// Directory used by the file-store tools
    pub data_dir: PathBuf,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            http: HttpSettings::default(),
            endpoints: Endpoints::default(),
            google: GoogleCredentials::default(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl ToolSettings {
    // ==================== Builder Methods ====================

    pub fn with_http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_google(mut self, google: GoogleCredentials) -> Self {
        self.google = google;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    // ==================== Accessors ====================

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
