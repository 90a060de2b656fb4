//! `search_stackoverflow` tool: Stack Exchange API 2.3 advanced search.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | Free-text search query |
//! | `sort` | string | No | `relevance` (default), `activity`, `votes`, `creation` |
//!
//! The API always gzip-compresses its responses; the shared client decodes
//! them transparently. Question bodies (HTML, via `filter=withbody`) are cut
//! to [`STACKOVERFLOW_BODY_LIMIT`] characters.

use super::{into_response, sort_or};
use crate::tools::http::{WebClient, WebError, endpoint};
use scout_application::config::ToolSettings;
use scout_domain::core::string::truncate_with_ellipsis;
use scout_domain::search::{
    MAX_RESULTS, STACKOVERFLOW_BODY_LIMIT,
    entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource},
};
use scout_domain::tool::entities::{RiskLevel, ToolDefinition, ToolParameter};
use serde::Deserialize;

/// Canonical tool name
pub const SEARCH_STACKOVERFLOW: &str = "search_stackoverflow";

const DEFAULT_SORT: &str = "relevance";

pub fn search_stackoverflow_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_STACKOVERFLOW,
        "Search Stack Overflow questions. Returns up to 10 questions with score, answer count, tags and body excerpt.",
        RiskLevel::Low,
    )
    .with_parameter(ToolParameter::new("query", "The search query", true).with_type("string"))
    .with_parameter(
        ToolParameter::new(
            "sort",
            "Sort order: relevance, activity, votes or creation (default: relevance)",
            false,
        )
        .with_type("string"),
    )
}

#[derive(Debug, Deserialize)]
struct QuestionSearch {
    #[serde(default)]
    items: Vec<Question>,
    total: Option<u64>,
    /// Present when the API rejects the request inside a 200 body
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Question {
    title: Option<String>,
    link: Option<String>,
    score: Option<i64>,
    answer_count: Option<u64>,
    is_answered: Option<bool>,
    #[serde(default)]
    tags: Vec<String>,
    body: Option<String>,
}

impl From<Question> for SearchResult {
    fn from(q: Question) -> Self {
        let snippet = truncate_with_ellipsis(&q.body.unwrap_or_default(), STACKOVERFLOW_BODY_LIMIT);
        SearchResult::new(q.title.unwrap_or_default(), q.link.unwrap_or_default(), snippet)
            .with_details(ResultDetails::Question {
                score: q.score.unwrap_or_default(),
                answer_count: q.answer_count.unwrap_or_default(),
                is_answered: q.is_answered.unwrap_or_default(),
                tags: q.tags,
            })
    }
}

/// Search Stack Overflow questions.
pub async fn search_stackoverflow(
    web: &WebClient,
    settings: &ToolSettings,
    query: &str,
    sort: Option<&str>,
) -> SearchResponse {
    let sort = sort_or(sort, DEFAULT_SORT);
    let outcome = run(web, &settings.endpoints.stackexchange, query, sort).await;
    into_response(query, SearchSource::StackOverflow, outcome)
}

async fn run(web: &WebClient, base: &str, query: &str, sort: &str) -> Result<SearchHits, WebError> {
    let url = endpoint(base, &["2.3", "search", "advanced"])?;
    let pagesize = MAX_RESULTS.to_string();
    let request = web.get(url).query(&[
        ("order", "desc"),
        ("sort", sort),
        ("q", query),
        ("site", "stackoverflow"),
        ("pagesize", pagesize.as_str()),
        ("filter", "withbody"),
    ]);

    let data: QuestionSearch = web.send_json(request).await?;
    if let Some(message) = data.error_message {
        return Err(WebError::Api(message));
    }

    let results = data
        .items
        .into_iter()
        .take(MAX_RESULTS)
        .map(SearchResult::from)
        .collect();

    Ok(SearchHits::new(results).with_total(data.total.unwrap_or_default()))
}
