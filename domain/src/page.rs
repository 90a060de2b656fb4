//! Fetched page content
//!
//! [`PageContent`] is the record returned by the URL fetcher. HTML pages
//! carry a `title` and the extracted readable text; any other content type is
//! returned verbatim.

use serde::{Deserialize, Serialize};

use crate::core::outcome::Outcome;

/// Payload of a successful fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBody {
    /// `<title>` of an HTML page (falls back to the URL); absent for non-HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    /// Lowercased `content-type` header value
    pub content_type: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub url: String,
    #[serde(flatten)]
    pub outcome: Outcome<PageBody>,
}

impl PageContent {
    pub fn new(url: impl Into<String>, body: PageBody) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::Done(body),
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: Outcome::failed(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.error()
    }

    pub fn body(&self) -> Option<&PageBody> {
        self.outcome.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_html_page_shape() {
        let page = PageContent::new(
            "https://example.com",
            PageBody {
                title: Some("Example".to_string()),
                content: "Hello".to_string(),
                content_type: "text/html; charset=utf-8".to_string(),
                status_code: 200,
            },
        );

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["title"], "Example");
        assert_eq!(value["status_code"], 200);
    }

    #[test]
    fn test_non_html_page_has_no_title() {
        let page = PageContent::new(
            "https://example.com/data.json",
            PageBody {
                title: None,
                content: "{}".to_string(),
                content_type: "application/json".to_string(),
                status_code: 200,
            },
        );

        let value = serde_json::to_value(&page).unwrap();
        assert!(value.get("title").is_none());
        assert_eq!(value["content_type"], "application/json");
    }

    #[test]
    fn test_failed_page() {
        let page = PageContent::failed("https://example.com", "HTTP 404");
        assert!(!page.is_success());
        assert!(page.body().is_none());
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"url": "https://example.com", "error": "HTTP 404"})
        );
    }
}
