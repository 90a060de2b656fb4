//! Value-level success/failure shared by the search and page records.
//!
//! Tool records never surface failures as Rust errors. Instead the record
//! embeds an [`Outcome`], flattened into the record's JSON so that a failed
//! call serializes as `{..identifying fields, "error": "..."}` and a
//! successful one carries the payload fields in place of `error`.

use serde::{Deserialize, Serialize};

/// Either the payload of a successful call or its error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    /// The call failed; nothing else is reported
    Failed { error: String },
    /// The call succeeded with this payload
    Done(T),
}

impl<T> Outcome<T> {
    pub fn failed(error: impl Into<String>) -> Self {
        Outcome::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Failed { error } => Some(error),
            Outcome::Done(_) => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Done(value) => Some(value),
            Outcome::Failed { .. } => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Done(value),
            Err(e) => Outcome::failed(e.to_string()),
        }
    }
}
