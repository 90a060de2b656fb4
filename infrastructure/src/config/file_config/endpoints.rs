//! API endpoint configuration from TOML (`[endpoints]` section)

use scout_application::config::Endpoints;
use serde::{Deserialize, Serialize};

/// Raw endpoint base URLs from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointsConfig {
    pub google: String,
    pub github: String,
    pub reddit: String,
    pub stackexchange: String,
    pub wikipedia: String,
}

impl Default for FileEndpointsConfig {
    fn default() -> Self {
        let defaults = Endpoints::default();
        Self {
            google: defaults.google,
            github: defaults.github,
            reddit: defaults.reddit,
            stackexchange: defaults.stackexchange,
            wikipedia: defaults.wikipedia,
        }
    }
}

impl FileEndpointsConfig {
    /// `(name, url)` pairs, for validation and display
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("google", &self.google),
            ("github", &self.github),
            ("reddit", &self.reddit),
            ("stackexchange", &self.stackexchange),
            ("wikipedia", &self.wikipedia),
        ]
    }

    pub fn to_endpoints(&self) -> Endpoints {
        Endpoints {
            google: self.google.clone(),
            github: self.github.clone(),
            reddit: self.reddit.clone(),
            stackexchange: self.stackexchange.clone(),
            wikipedia: self.wikipedia.clone(),
        }
    }
}
