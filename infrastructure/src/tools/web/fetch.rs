//! `fetch_url_content` tool: fetch a URL and extract readable text.
//!
//! HTML responses are reduced to the text of the page's main region; any
//! other content type is returned verbatim.

use crate::tools::http::{WebClient, WebError};
use reqwest::{StatusCode, Url};
use scout_domain::page::{PageBody, PageContent};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use scraper::{ElementRef, Html, Node, Selector};

/// Tool name constant
pub const FETCH_URL_CONTENT: &str = "fetch_url_content";

/// Elements whose entire subtree is dropped before extraction
const SKIP_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

/// Main-content selectors, tried in order
const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    ".content",
    ".main-content",
    "#content",
    "#main",
];

pub fn fetch_url_content_definition() -> ToolDefinition {
    ToolDefinition::new(
        FETCH_URL_CONTENT,
        "Fetch a web page and extract its main text content. Non-HTML responses are returned as-is.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("url", "The http(s) URL to fetch", true).with_type("url"))
}

/// Fetch `url` with the fetch timeout and build its [`PageContent`].
pub async fn fetch_url_content(web: &WebClient, url: &str) -> PageContent {
    match fetch(web, url).await {
        Ok(body) => {
            tracing::debug!(url, status = body.status_code, content_type = %body.content_type, "Fetched page");
            PageContent::new(url, body)
        }
        Err(e) => {
            tracing::warn!(url, error = %e, "Fetch failed");
            PageContent::failed(url, e.to_string())
        }
    }
}

async fn fetch(web: &WebClient, raw: &str) -> Result<PageBody, WebError> {
    let url = Url::parse(raw).map_err(|e| WebError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(WebError::InvalidUrl(format!(
            "{}: only http and https are supported",
            raw
        )));
    }

    let response = web
        .get_with_timeout(url, web.settings().fetch_timeout)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(WebError::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();

    let text = response.text().await?;

    if content_type.contains("text/html") {
        let (title, content) = extract_page(&text);
        Ok(PageBody {
            title: Some(title.unwrap_or_else(|| raw.to_string())),
            content,
            content_type,
            status_code: status.as_u16(),
        })
    } else {
        Ok(PageBody {
            title: None,
            content: text,
            content_type,
            status_code: status.as_u16(),
        })
    }
}

/// Extract `(title, text)` from an HTML document.
///
/// The text comes from the first element matching one of the content
/// selectors (outside any skipped element), or the whole document when none
/// match. It is every trimmed, non-empty text node, joined by newlines.
pub fn extract_page(html: &str) -> (Option<String>, String) {
    let document = Html::parse_document(html);

    let title = selector("title")
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let root = CONTENT_SELECTORS
        .iter()
        .filter_map(|css| selector(css))
        .find_map(|sel| document.select(&sel).find(|el| !is_skipped(el)))
        .unwrap_or_else(|| document.root_element());

    let mut parts = Vec::new();
    collect_text(root, &mut parts);
    (title, parts.join("\n"))
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Whether the element is, or sits inside, one of [`SKIP_TAGS`]
fn is_skipped(element: &ElementRef) -> bool {
    SKIP_TAGS.contains(&element.value().name())
        || element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|a| SKIP_TAGS.contains(&a.value().name()))
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}
