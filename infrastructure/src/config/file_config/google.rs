//! Google Custom Search credentials (`[google]` section)
//!
//! Usually supplied through `SEARCH_API_KEY` / `GOOGLE_CSE_ID` rather than a
//! file; the loader maps both variables onto this section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGoogleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cse_id: Option<String>,
}
