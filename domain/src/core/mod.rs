//! Core domain concepts shared across all subdomains.
//!
//! - [`outcome::Outcome`]: success payload or value-level error of a tool record
//! - [`string`]: character-based truncation used by the search tools

pub mod outcome;
pub mod string;
