//! Search domain entities

use serde::{Deserialize, Serialize};

use crate::core::outcome::Outcome;

/// The provider a search response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    Google,
    Github,
    Reddit,
    StackOverflow,
    Wikipedia,
}

impl SearchSource {
    pub fn as_str(&self) -> &str {
        match self {
            SearchSource::Google => "google",
            SearchSource::Github => "github",
            SearchSource::Reddit => "reddit",
            SearchSource::StackOverflow => "stackoverflow",
            SearchSource::Wikipedia => "wikipedia",
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider-specific fields of a [`SearchResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultDetails {
    /// A GitHub repository
    Repository {
        stars: u64,
        language: String,
        updated_at: String,
    },
    /// A Stack Overflow question
    Question {
        score: i64,
        answer_count: u64,
        is_answered: bool,
        tags: Vec<String>,
    },
    /// A Reddit post. `subreddit` is omitted for subreddit-scoped searches.
    Post {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subreddit: Option<String>,
        score: i64,
        num_comments: u64,
        author: String,
    },
    /// A Wikipedia article with its (truncated) plain-text extract
    Article { content: String },
}

/// A single normalized search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(flatten)]
    pub details: Option<ResultDetails>,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: ResultDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Payload of a successful search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    /// At most [`MAX_RESULTS`](super::MAX_RESULTS), in provider order
    pub results: Vec<SearchResult>,
    /// Provider's estimate of the total number of matches, when it gives one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl SearchHits {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            total: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

/// Record returned by every search tool.
///
/// The query is always echoed verbatim. On failure the record carries only
/// `query`, `source`, the optional `subreddit` and `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub source: SearchSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome<SearchHits>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, source: SearchSource, hits: SearchHits) -> Self {
        Self {
            query: query.into(),
            source,
            subreddit: None,
            outcome: Outcome::Done(hits),
        }
    }

    pub fn failed(query: impl Into<String>, source: SearchSource, error: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            source,
            subreddit: None,
            outcome: Outcome::failed(error),
        }
    }

    pub fn with_subreddit(mut self, subreddit: impl Into<String>) -> Self {
        self.subreddit = Some(subreddit.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn error(&self) -> Option<&str> {
        self.outcome.error()
    }

    /// Results of a successful search; empty on failure
    pub fn results(&self) -> &[SearchResult] {
        self.outcome
            .value()
            .map(|hits| hits.results.as_slice())
            .unwrap_or_default()
    }

    pub fn total(&self) -> Option<u64> {
        self.outcome.value().and_then(|hits| hits.total)
    }
}
