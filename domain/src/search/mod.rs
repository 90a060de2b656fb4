//! Search domain module
//!
//! Records produced by the search tools. Every provider maps its payload into
//! the same [`SearchResult`] shape (`title`, `url`, `snippet`) and adds its own
//! fields through [`ResultDetails`], flattened into the result.
//!
//! | Source | `title` | `snippet` | Details |
//! |--------|---------|-----------|---------|
//! | Google | page title | search snippet | none |
//! | GitHub | repository full name | description | `stars`, `language`, `updated_at` |
//! | Reddit | post title | selftext (500 chars) | `subreddit`, `score`, `num_comments`, `author` |
//! | Stack Overflow | question title | body (300 chars) | `score`, `answer_count`, `is_answered`, `tags` |
//! | Wikipedia | article title | search snippet | `content` (1000 chars) |

pub mod entities;

pub use entities::{ResultDetails, SearchHits, SearchResponse, SearchResult, SearchSource};

/// Maximum number of results a search tool returns.
pub const MAX_RESULTS: usize = 10;

/// Character limit for Reddit selftext.
pub const REDDIT_SELFTEXT_LIMIT: usize = 500;

/// Character limit for Stack Overflow question bodies.
pub const STACKOVERFLOW_BODY_LIMIT: usize = 300;

/// Character limit for Wikipedia page extracts.
pub const WIKIPEDIA_EXTRACT_LIMIT: usize = 1000;
