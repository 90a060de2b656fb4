//! **Web Tools**: the search APIs and the URL fetcher
//!
//! # Tools
//!
//! | Tool | Backend | Key Dependency |
//! |------|---------|----------------|
//! | `search_google` | Google Custom Search JSON API | `reqwest` |
//! | `search_github` | GitHub REST repository search | `reqwest` |
//! | `search_reddit` | Reddit public `search.json` | `reqwest` |
//! | `search_subreddit` | Reddit `r/{subreddit}/search.json` | `reqwest` |
//! | `search_stackoverflow` | Stack Exchange API 2.3 | `reqwest` (gzip) |
//! | `search_wikipedia` | MediaWiki action API | `reqwest` |
//! | `fetch_url_content` | any http(s) URL | `reqwest` + `scraper` |
//!
//! All are [`RiskLevel::Low`](scout_domain::tool::entities::RiskLevel::Low).
//!
//! # Failure Model
//!
//! Every function here returns its record directly. A failed request is
//! folded into the record's `error` field through [`WebError`]'s `Display`
//! output and logged at `warn`; nothing is retried.

mod fetch;
mod github;
mod google;
mod reddit;
mod stackoverflow;
mod wikipedia;

pub use fetch::{FETCH_URL_CONTENT, extract_page, fetch_url_content, fetch_url_content_definition};
pub use github::{SEARCH_GITHUB, search_github, search_github_definition};
pub use google::{MISSING_CREDENTIALS, SEARCH_GOOGLE, search_google, search_google_definition};
pub use reddit::{
    SEARCH_REDDIT, SEARCH_SUBREDDIT, search_reddit, search_reddit_definition, search_subreddit,
    search_subreddit_definition,
};
pub use stackoverflow::{SEARCH_STACKOVERFLOW, search_stackoverflow, search_stackoverflow_definition};
pub use wikipedia::{SEARCH_WIKIPEDIA, search_wikipedia, search_wikipedia_definition};

use super::http::WebError;
use scout_domain::search::entities::{SearchHits, SearchResponse, SearchSource};

/// Fold a search outcome into its record, logging failures.
fn into_response(
    query: &str,
    source: SearchSource,
    outcome: Result<SearchHits, WebError>,
) -> SearchResponse {
    match outcome {
        Ok(hits) => {
            tracing::debug!(%source, query, results = hits.results.len(), "Search completed");
            SearchResponse::new(query, source, hits)
        }
        Err(e) => {
            tracing::warn!(%source, query, error = %e, "Search failed");
            SearchResponse::failed(query, source, e.to_string())
        }
    }
}

/// `sort` argument, or `default` when absent or empty
fn sort_or<'a>(sort: Option<&'a str>, default: &'a str) -> &'a str {
    sort.filter(|s| !s.is_empty()).unwrap_or(default)
}
