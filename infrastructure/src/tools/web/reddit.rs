//! `search_reddit` and `search_subreddit` tools: Reddit's public JSON search.
//!
//! # Parameters
//!
//! | Tool | Name | Required | Description |
//! |------|------|:---:|-------------|
//! | both | `query` | Yes | The search query |
//! | both | `sort` | No | `relevance` (default), `hot`, `top`, `new`, `comments` |
//! | `search_subreddit` | `subreddit` | Yes | Subreddit name without `r/` |
//!
//! Subreddit-scoped results omit the per-post `subreddit` field and the record
//! echoes the subreddit instead. Selftext is cut to
//! [`REDDIT_SELFTEXT_LIMIT`] characters.

use super::{into_response, sort_or};
use crate::tools::http::{WebClient, WebError, endpoint};
use scout_application::config::ToolSettings;
use scout_domain::core::string::truncate_with_ellipsis;
use scout_domain::search::{
    MAX_RESULTS, REDDIT_SELFTEXT_LIMIT,
    entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use serde::Deserialize;

/// Canonical tool name for the site-wide search
pub const SEARCH_REDDIT: &str = "search_reddit";

/// Canonical tool name for the subreddit-scoped search
pub const SEARCH_SUBREDDIT: &str = "search_subreddit";

const DEFAULT_SORT: &str = "relevance";

/// Permalinks are site-relative
const PERMALINK_BASE: &str = "https://reddit.com";

const SORT_DESCRIPTION: &str =
    "Sort order: relevance, hot, top, new or comments (default: relevance)";

pub fn search_reddit_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_REDDIT,
        "Search Reddit posts across all subreddits. Returns up to 10 posts with score, comment count and text.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
    .with_parameter(ToolParameter::new("sort", SORT_DESCRIPTION, false).with_type("string"))
}

pub fn search_subreddit_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_SUBREDDIT,
        "Search posts within one subreddit. Returns up to 10 posts with score, comment count and text.",
        RiskLevel::Low,
    )
    .with_parameter(
        ToolParameter::new("subreddit", "Subreddit name without the r/ prefix", true)
            .with_type("string"),
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
    .with_parameter(ToolParameter::new("sort", SORT_DESCRIPTION, false).with_type("string"))
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: Option<ListingData>,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: Post,
}

#[derive(Debug, Deserialize)]
struct Post {
    title: Option<String>,
    permalink: Option<String>,
    subreddit: Option<String>,
    score: Option<i64>,
    num_comments: Option<u64>,
    author: Option<String>,
    selftext: Option<String>,
}

impl Post {
    fn into_result(self, include_subreddit: bool) -> SearchResult {
        let url = format!("{}{}", PERMALINK_BASE, self.permalink.unwrap_or_default());
        let snippet = truncate_with_ellipsis(&self.selftext.unwrap_or_default(), REDDIT_SELFTEXT_LIMIT);

        SearchResult::new(self.title.unwrap_or_default(), url, snippet).with_details(
            ResultDetails::Post {
                subreddit: include_subreddit.then(|| self.subreddit.unwrap_or_default()),
                score: self.score.unwrap_or_default(),
                num_comments: self.num_comments.unwrap_or_default(),
                author: self.author.unwrap_or_default(),
            },
        )
    }
}

/// Search all of Reddit.
pub async fn search_reddit(
    web: &WebClient,
    settings: &ToolSettings,
    query: &str,
    sort: Option<&str>,
) -> SearchResponse {
    let sort = sort_or(sort, DEFAULT_SORT);
    let outcome = match endpoint(&settings.endpoints.reddit, &["search.json"]) {
        Ok(url) => run(web, url, &[("q", query), ("sort", sort)], true).await,
        Err(e) => Err(e),
    };
    into_response(query, SearchSource::Reddit, outcome)
}

/// Search one subreddit. The subreddit name is sent as a single path segment.
pub async fn search_subreddit(
    web: &WebClient,
    settings: &ToolSettings,
    subreddit: &str,
    query: &str,
    sort: Option<&str>,
) -> SearchResponse {
    let sort = sort_or(sort, DEFAULT_SORT);
    let outcome = match endpoint(&settings.endpoints.reddit, &["r", subreddit, "search.json"]) {
        Ok(url) => {
            run(
                web,
                url,
                &[("q", query), ("sort", sort), ("restrict_sr", "1")],
                false,
            )
            .await
        }
        Err(e) => Err(e),
    };
    into_response(query, SearchSource::Reddit, outcome).with_subreddit(subreddit)
}

async fn run(
    web: &WebClient,
    url: reqwest::Url,
    params: &[(&str, &str)],
    include_subreddit: bool,
) -> Result<SearchHits, WebError> {
    let limit = MAX_RESULTS.to_string();
    let request = web.get(url).query(params).query(&[("limit", limit.as_str())]);

    let listing: Listing = web.send_json(request).await?;
    let results = listing
        .data
        .map(|data| data.children)
        .unwrap_or_default()
        .into_iter()
        .take(MAX_RESULTS)
        .map(|child| child.data.into_result(include_subreddit))
        .collect();

    Ok(SearchHits::new(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_application::config::{Endpoints, HttpSettings};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> ToolSettings {
        ToolSettings::default().with_endpoints(Endpoints::all_at(server.uri()))
    }

    fn client() -> WebClient {
        WebClient::new(HttpSettings::default()).unwrap()
    }

    fn listing(selftext: &str) -> serde_json::Value {
        json!({
            "kind": "Listing",
            "data": {
                "children": [{
                    "kind": "t3",
                    "data": {
                        "title": "Why Rust?",
                        "permalink": "/r/rust/comments/abc/why_rust/",
                        "subreddit": "rust",
                        "score": 42,
                        "num_comments": 7,
                        "author": "ferris",
                        "selftext": selftext
                    }
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_site_wide_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "why rust"))
            .and(query_param("sort", "relevance"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing("memory safety")))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_reddit(&client(), &settings_for(&server), "why rust", None).await;

        assert!(response.is_success());
        assert!(response.total().is_none());
        let result = &response.results()[0];
        assert_eq!(result.url, "https://reddit.com/r/rust/comments/abc/why_rust/");
        assert_eq!(result.snippet, "memory safety");
        assert_eq!(
            result.details,
            Some(ResultDetails::Post {
                subreddit: Some("rust".to_string()),
                score: 42,
                num_comments: 7,
                author: "ferris".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_selftext_is_truncated() {
        let server = MockServer::start().await;
        let long = "a".repeat(REDDIT_SELFTEXT_LIMIT + 50);
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing(&long)))
            .mount(&server)
            .await;

        let response = search_reddit(&client(), &settings_for(&server), "q", None).await;

        let snippet = &response.results()[0].snippet;
        assert_eq!(snippet.chars().count(), REDDIT_SELFTEXT_LIMIT + 3);
        assert!(snippet.ends_with("..."));
    }

    #[tokio::test]
    async fn test_subreddit_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/rust/search.json"))
            .and(query_param("restrict_sr", "1"))
            .and(query_param("sort", "new"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing("")))
            .expect(1)
            .mount(&server)
            .await;

        let response =
            search_subreddit(&client(), &settings_for(&server), "rust", "async", Some("new")).await;

        assert_eq!(response.subreddit.as_deref(), Some("rust"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["subreddit"], "rust");
        assert!(value["results"][0].get("subreddit").is_none());
        assert_eq!(value["results"][0]["score"], 42);
    }

    #[tokio::test]
    async fn test_subreddit_is_one_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/rust%2F..%2Fadmin/search.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing("")))
            .expect(1)
            .mount(&server)
            .await;

        let response =
            search_subreddit(&client(), &settings_for(&server), "rust/../admin", "q", None).await;
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_subreddit_failure_keeps_identity() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let response =
            search_subreddit(&client(), &settings_for(&server), "nosuchsub", "q", None).await;

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"query": "q", "source": "reddit", "subreddit": "nosuchsub", "error": "HTTP 404"})
        );
    }

    #[tokio::test]
    async fn test_query_with_reserved_characters() {
        let query = r#"c++ & "async" #1"#;
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing("")))
            .expect(1)
            .mount(&server)
            .await;

        let response = search_reddit(&client(), &settings_for(&server), query, None).await;

        assert!(response.is_success());
        assert_eq!(response.query, query);
        assert_eq!(response.results().len(), 1);
    }
}
