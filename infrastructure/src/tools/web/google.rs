//! `search_google` tool: Google Custom Search JSON API.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | The search query |
//!
//! Requires both `SEARCH_API_KEY` and `GOOGLE_CSE_ID` (see
//! [`GoogleCredentials`](scout_application::config::GoogleCredentials)).
//! Without them the tool answers immediately with [`MISSING_CREDENTIALS`].

use super::into_response;
use crate::tools::http::{WebClient, WebError, endpoint};
use scout_application::config::ToolSettings;
use scout_domain::search::{
    MAX_RESULTS,
    entities::{SearchHits, SearchResponse, SearchResult, SearchSource},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use serde::Deserialize;

/// Canonical tool name
pub const SEARCH_GOOGLE: &str = "search_google";

/// Error returned when either credential is absent or empty
pub const MISSING_CREDENTIALS: &str = "Missing SEARCH_API_KEY or GOOGLE_CSE_ID";

pub fn search_google_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_GOOGLE,
        "Search the web using Google Custom Search. Returns up to 10 results with title, URL and snippet.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<GoogleItem>,
    #[serde(rename = "searchInformation")]
    search_information: Option<SearchInformation>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    /// Google reports the estimate as a decimal string
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

/// Search the web with Google Custom Search.
pub async fn search_google(web: &WebClient, settings: &ToolSettings, query: &str) -> SearchResponse {
    let Some((api_key, cse_id)) = settings.google.pair() else {
        tracing::warn!("Google search requested without credentials");
        return SearchResponse::failed(query, SearchSource::Google, MISSING_CREDENTIALS);
    };

    let outcome = run(web, &settings.endpoints.google, api_key, cse_id, query).await;
    into_response(query, SearchSource::Google, outcome)
}

async fn run(
    web: &WebClient,
    base: &str,
    api_key: &str,
    cse_id: &str,
    query: &str,
) -> Result<SearchHits, WebError> {
    let url = endpoint(base, &["customsearch", "v1"])?;
    let num = MAX_RESULTS.to_string();
    let request = web.get(url).query(&[
        ("key", api_key),
        ("cx", cse_id),
        ("q", query),
        ("num", num.as_str()),
    ]);

    let data: GoogleResponse = web.send_json(request).await?;

    let results: Vec<SearchResult> = data
        .items
        .into_iter()
        .take(MAX_RESULTS)
        .map(|item| {
            SearchResult::new(
                item.title.unwrap_or_default(),
                item.link.unwrap_or_default(),
                item.snippet.unwrap_or_default(),
            )
        })
        .collect();

    let total = data
        .search_information
        .and_then(|info| info.total_results)
        .and_then(|t| t.parse::<u64>().ok())
        .unwrap_or(results.len() as u64);

    Ok(SearchHits::new(results).with_total(total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_application::config::{Endpoints, GoogleCredentials, HttpSettings};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> ToolSettings {
        ToolSettings::default()
            .with_endpoints(Endpoints::all_at(server.uri()))
            .with_google(GoogleCredentials::new("test-key", "test-cx"))
    }

    fn client() -> WebClient {
        WebClient::new(HttpSettings::default()).unwrap()
    }

    #[test]
    fn test_definition() {
        let def = search_google_definition();
        assert_eq!(def.name, SEARCH_GOOGLE);
        assert!(!def.is_high_risk());
        assert!(def.parameter("query").unwrap().required);
    }

    #[tokio::test]
    async fn test_missing_credentials_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let settings = ToolSettings::default()
            .with_endpoints(Endpoints::all_at(server.uri()))
            .with_google(GoogleCredentials::new("key", ""));
        let response = search_google(&client(), &settings, "rust").await;

        assert_eq!(response.query, "rust");
        assert_eq!(response.error(), Some(MISSING_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_maps_items_and_total() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customsearch/v1"))
            .and(query_param("key", "test-key"))
            .and(query_param("cx", "test-cx"))
            .and(query_param("q", "rust async"))
            .and(query_param("num", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "searchInformation": {"totalResults": "12345"},
                "items": [
                    {"title": "Async Rust", "link": "https://rust-lang.github.io/async-book/", "snippet": "The async book"},
                    {"title": "Tokio", "link": "https://tokio.rs"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_google(&client(), &settings_for(&server), "rust async").await;

        assert!(response.is_success());
        assert_eq!(response.source, SearchSource::Google);
        assert_eq!(response.total(), Some(12345));
        let results = response.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://rust-lang.github.io/async-book/");
        assert_eq!(results[1].snippet, "");
        assert!(results[0].details.is_none());
    }

    #[tokio::test]
    async fn test_total_falls_back_to_result_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"title": "One", "link": "https://one.example", "snippet": "1"}]
            })))
            .mount(&server)
            .await;

        let response = search_google(&client(), &settings_for(&server), "one").await;

        assert_eq!(response.total(), Some(1));
    }

    #[tokio::test]
    async fn test_no_items_is_empty_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "searchInformation": {"totalResults": "0"}
            })))
            .mount(&server)
            .await;

        let response = search_google(&client(), &settings_for(&server), "zzzz").await;

        assert!(response.is_success());
        assert!(response.results().is_empty());
        assert_eq!(response.total(), Some(0));
    }

    #[tokio::test]
    async fn test_non_200_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": {"code": 403}})))
            .mount(&server)
            .await;

        let response = search_google(&client(), &settings_for(&server), "rust").await;

        assert_eq!(response.error(), Some("HTTP 403"));
        assert!(response.results().is_empty());
        assert_eq!(response.query, "rust");
    }

    #[tokio::test]
    async fn test_timeout_error_omits_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("key", "SECRET-KEY-123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let http = HttpSettings {
            timeout: Duration::from_millis(50),
            ..Default::default()
        };
        let settings = ToolSettings::default()
            .with_endpoints(Endpoints::all_at(server.uri()))
            .with_google(GoogleCredentials::new("SECRET-KEY-123", "test-cx"))
            .with_http(http.clone());
        let web = WebClient::new(http).unwrap();

        let response = search_google(&web, &settings, "rust").await;

        let error = response.error().unwrap();
        assert!(error.starts_with("Request failed"));
        let record = serde_json::to_string(&response).unwrap();
        assert!(!record.contains("SECRET-KEY-123"));
        assert!(!record.contains("key="));
    }
}
