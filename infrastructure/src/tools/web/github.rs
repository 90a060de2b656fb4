//! `search_github` tool: GitHub repository search.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | GitHub search query (qualifiers allowed) |
//! | `sort` | string | No | `stars` (default), `forks`, `help-wanted-issues`, `updated` |
//!
//! Unauthenticated, so GitHub's anonymous rate limit applies; a throttled
//! call surfaces as `HTTP 403`.

use super::{into_response, sort_or};
use crate::tools::http::{WebClient, WebError, endpoint};
use scout_application::config::ToolSettings;
use scout_domain::search::{
    MAX_RESULTS,
    entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use serde::Deserialize;

/// Canonical tool name
pub const SEARCH_GITHUB: &str = "search_github";

const DEFAULT_SORT: &str = "stars";

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub fn search_github_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_GITHUB,
        "Search GitHub repositories. Returns up to 10 repositories with stars, language and last update.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
    .with_parameter(
        ToolParameter::new(
            "sort",
            "Sort field: stars, forks, help-wanted-issues or updated (default: stars)",
            false,
        )
        .with_type("string"),
    )
}

#[derive(Debug, Deserialize)]
struct RepositorySearch {
    total_count: Option<u64>,
    #[serde(default)]
    items: Vec<Repository>,
}

#[derive(Debug, Deserialize)]
struct Repository {
    full_name: String,
    html_url: String,
    description: Option<String>,
    stargazers_count: Option<u64>,
    language: Option<String>,
    updated_at: Option<String>,
}

impl From<Repository> for SearchResult {
    fn from(repo: Repository) -> Self {
        SearchResult::new(
            repo.full_name,
            repo.html_url,
            repo.description.unwrap_or_default(),
        )
        .with_details(ResultDetails::Repository {
            stars: repo.stargazers_count.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            updated_at: repo.updated_at.unwrap_or_default(),
        })
    }
}

/// Search GitHub repositories, most-starred first unless `sort` says otherwise.
pub async fn search_github(
    web: &WebClient,
    settings: &ToolSettings,
    query: &str,
    sort: Option<&str>,
) -> SearchResponse {
    let outcome = run(web, &settings.endpoints.github, query, sort_or(sort, DEFAULT_SORT)).await;
    into_response(query, SearchSource::Github, outcome)
}

async fn run(web: &WebClient, base: &str, query: &str, sort: &str) -> Result<SearchHits, WebError> {
    let url = endpoint(base, &["search", "repositories"])?;
    let per_page = MAX_RESULTS.to_string();
    let request = web
        .get(url)
        .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
        .query(&[
            ("q", query),
            ("sort", sort),
            ("order", "desc"),
            ("per_page", per_page.as_str()),
        ]);

    let data: RepositorySearch = web.send_json(request).await?;
    let results = data
        .items
        .into_iter()
        .take(MAX_RESULTS)
        .map(SearchResult::from)
        .collect();

    Ok(SearchHits::new(results).with_total(data.total_count.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_application::config::{Endpoints, HttpSettings};
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> ToolSettings {
        ToolSettings::default().with_endpoints(Endpoints::all_at(server.uri()))
    }

    fn client() -> WebClient {
        WebClient::new(HttpSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_maps_repositories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(header("accept", GITHUB_ACCEPT))
            .and(query_param("q", "web framework"))
            .and(query_param("sort", "stars"))
            .and(query_param("order", "desc"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 2,
                "items": [
                    {
                        "full_name": "tokio-rs/axum",
                        "html_url": "https://github.com/tokio-rs/axum",
                        "description": "Ergonomic and modular web framework",
                        "stargazers_count": 20000,
                        "language": "Rust",
                        "updated_at": "2024-05-01T10:00:00Z"
                    },
                    {
                        "full_name": "someone/untitled",
                        "html_url": "https://github.com/someone/untitled",
                        "description": null,
                        "stargazers_count": 3,
                        "language": null,
                        "updated_at": "2023-01-01T00:00:00Z"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_github(&client(), &settings_for(&server), "web framework", None).await;

        assert!(response.is_success());
        assert_eq!(response.query, "web framework");
        assert_eq!(response.total(), Some(2));

        let results = response.results();
        assert_eq!(results[0].title, "tokio-rs/axum");
        assert_eq!(
            results[0].details,
            Some(ResultDetails::Repository {
                stars: 20000,
                language: "Rust".to_string(),
                updated_at: "2024-05-01T10:00:00Z".to_string(),
            })
        );
        assert_eq!(results[1].snippet, "");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["source"], "github");
        assert_eq!(value["results"][1]["language"], "");
        assert_eq!(value["results"][0]["stars"], 20000);
    }

    #[tokio::test]
    async fn test_empty_sort_uses_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("sort", "stars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_count": 0, "items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_github(&client(), &settings_for(&server), "x", Some("")).await;
        assert!(response.is_success());
        assert_eq!(response.total(), Some(0));
    }

    #[tokio::test]
    async fn test_explicit_sort_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("sort", "updated"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_github(&client(), &settings_for(&server), "x", Some("updated")).await;
        assert_eq!(response.total(), Some(0));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let response = search_github(&client(), &settings_for(&server), "rust", None).await;

        assert_eq!(response.error(), Some("HTTP 403"));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("results").is_none());
    }
}
