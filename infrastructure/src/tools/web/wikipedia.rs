//! `search_wikipedia` tool: MediaWiki search plus per-article extracts.
//!
//! One search request, then one extract request per hit, issued one after
//! another. A failed extract request leaves that article's `content` empty;
//! only the search request itself can fail the call.

use super::into_response;
use crate::tools::http::{WebClient, WebError, endpoint};
use scout_application::config::ToolSettings;
use scout_domain::core::string::truncate_with_ellipsis;
use scout_domain::search::{
    MAX_RESULTS, WIKIPEDIA_EXTRACT_LIMIT,
    entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Canonical tool name
pub const SEARCH_WIKIPEDIA: &str = "search_wikipedia";

/// Page id MediaWiki uses for a title that does not exist
const MISSING_PAGE_ID: &str = "-1";

pub fn search_wikipedia_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_WIKIPEDIA,
        "Search English Wikipedia. Returns up to 10 articles with snippet and the beginning of the article text.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    error: Option<ApiError>,
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtractPayload {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: BTreeMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    extract: Option<String>,
}

/// Search Wikipedia and attach each article's plain-text extract.
pub async fn search_wikipedia(
    web: &WebClient,
    settings: &ToolSettings,
    query: &str,
) -> SearchResponse {
    let outcome = run(web, &settings.endpoints.wikipedia, query).await;
    into_response(query, SearchSource::Wikipedia, outcome)
}

async fn run(web: &WebClient, base: &str, query: &str) -> Result<SearchHits, WebError> {
    let api = endpoint(base, &["w", "api.php"])?;
    let srlimit = MAX_RESULTS.to_string();
    let request = web
        .get(api.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("format", "json"),
            ("srlimit", srlimit.as_str()),
            ("srprop", "title|snippet"),
        ]);

    let data: SearchPayload = web.send_json(request).await?;
    if let Some(error) = data.error {
        return Err(WebError::Api(
            error.info.unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }

    let hits = data.query.map(|q| q.search).unwrap_or_default();
    let mut results = Vec::with_capacity(hits.len().min(MAX_RESULTS));

    for hit in hits.into_iter().take(MAX_RESULTS) {
        let extract = page_extract(web, &api, &hit.title).await;
        let url = article_url(base, &hit.title)?;
        results.push(
            SearchResult::new(hit.title, url, hit.snippet.unwrap_or_default()).with_details(
                ResultDetails::Article {
                    content: truncate_with_ellipsis(&extract, WIKIPEDIA_EXTRACT_LIMIT),
                },
            ),
        );
    }

    Ok(SearchHits::new(results))
}

/// `{base}/wiki/{Title_With_Underscores}`, percent-encoded
fn article_url(base: &str, title: &str) -> Result<String, WebError> {
    let slug = title.replace(' ', "_");
    Ok(endpoint(base, &["wiki", &slug])?.to_string())
}

/// Plain-text extract of the first existing page for `title`; empty on any failure.
async fn page_extract(web: &WebClient, api: &reqwest::Url, title: &str) -> String {
    let request = web
        .get(api.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("titles", title),
            ("format", "json"),
            ("explaintext", "1"),
        ]);

    match web.send_json::<ExtractPayload>(request).await {
        Ok(payload) => payload
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_iter()
            .find(|(id, _)| id != MISSING_PAGE_ID)
            .and_then(|(_, page)| page.extract)
            .unwrap_or_default(),
        Err(e) => {
            tracing::debug!(title, error = %e, "Wikipedia extract unavailable");
            String::new()
        }
    }
}
