//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! [`FileConfig::to_settings`] converts them into the application-layer
//! [`ToolSettings`].

mod endpoints;
mod google;
mod http;
mod storage;

pub use endpoints::FileEndpointsConfig;
pub use google::FileGoogleConfig;
pub use http::FileHttpConfig;
pub use storage::FileStorageConfig;

use reqwest::Url;
use scout_application::config::{GoogleCredentials, HttpSettings, ToolSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors found while validating a loaded configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("http.{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("endpoints.{name}: '{url}' is not an http(s) URL")]
    InvalidEndpoint { name: &'static str, url: String },

    #[error("storage.data_dir cannot be empty")]
    EmptyDataDir,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Outbound HTTP settings
    pub http: FileHttpConfig,
    /// API base URLs
    pub endpoints: FileEndpointsConfig,
    /// Google Custom Search credentials
    pub google: FileGoogleConfig,
    /// File store settings
    pub storage: FileStorageConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout("timeout_secs"));
        }
        if self.http.fetch_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout("fetch_timeout_secs"));
        }

        for (name, url) in self.endpoints.entries() {
            let valid = Url::parse(url)
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(ConfigValidationError::InvalidEndpoint {
                    name,
                    url: url.to_string(),
                });
            }
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDataDir);
        }

        Ok(())
    }

    /// Build the immutable settings every tool call receives
    pub fn to_settings(&self) -> ToolSettings {
        ToolSettings::default()
            .with_http(HttpSettings {
                user_agent: self.http.user_agent.clone(),
                timeout: Duration::from_secs(self.http.timeout_secs),
                fetch_timeout: Duration::from_secs(self.http.fetch_timeout_secs),
            })
            .with_endpoints(self.endpoints.to_endpoints())
            .with_google(GoogleCredentials {
                api_key: self.google.api_key.clone(),
                cse_id: self.google.cse_id.clone(),
            })
            .with_data_dir(self.storage.data_dir.clone())
    }
}
