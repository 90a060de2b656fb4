//! Conversion of tool records into host-facing [`ToolResult`]s.
//!
//! The record is always serialized as the result's `output`. A record that
//! carries an `error` additionally marks the result as failed with
//! `EXECUTION_FAILED`, so hosts that only look at `success` still notice.

use scout_domain::page::PageContent;
use scout_domain::search::entities::SearchResponse;
use scout_domain::storage::records::{FileResponse, ListingResponse};
use scout_domain::tool::value_objects::{ToolError, ToolResult, ToolResultMetadata};
use serde::Serialize;

/// A serializable tool record
pub trait ToolRecord: Serialize {
    /// The record's `error` field, if the call degraded
    fn error(&self) -> Option<&str>;

    /// Metadata describing the payload
    fn metadata(&self) -> ToolResultMetadata {
        ToolResultMetadata::default()
    }
}

impl ToolRecord for SearchResponse {
    fn error(&self) -> Option<&str> {
        SearchResponse::error(self)
    }

    fn metadata(&self) -> ToolResultMetadata {
        ToolResultMetadata {
            result_count: Some(self.results().len()),
            ..Default::default()
        }
    }
}

impl ToolRecord for PageContent {
    fn error(&self) -> Option<&str> {
        PageContent::error(self)
    }

    fn metadata(&self) -> ToolResultMetadata {
        ToolResultMetadata {
            bytes: self.body().map(|b| b.content.len()),
            ..Default::default()
        }
    }
}

impl ToolRecord for FileResponse {
    fn error(&self) -> Option<&str> {
        self.error_message()
    }

    fn metadata(&self) -> ToolResultMetadata {
        match self.value() {
            Some(record) => ToolResultMetadata {
                path: Some(record.path.clone()),
                bytes: record.content.as_ref().map(String::len),
                ..Default::default()
            },
            None => ToolResultMetadata::default(),
        }
    }
}

impl ToolRecord for ListingResponse {
    fn error(&self) -> Option<&str> {
        self.error_message()
    }

    fn metadata(&self) -> ToolResultMetadata {
        ToolResultMetadata {
            result_count: self.value().map(|listing| listing.files.len()),
            ..Default::default()
        }
    }
}

/// Serialize `record` into a [`ToolResult`] for `tool_name`.
pub fn into_tool_result<R: ToolRecord>(tool_name: &str, record: &R) -> ToolResult {
    let output = match serde_json::to_string(record) {
        Ok(json) => json,
        Err(e) => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to serialize record: {}", e)),
            );
        }
    };

    let result = match record.error() {
        Some(error) => {
            ToolResult::failure(tool_name, ToolError::execution_failed(error)).with_output(output)
        }
        None => ToolResult::success(tool_name, output),
    };
    result.with_metadata(record.metadata())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::search::entities::{SearchHits, SearchResult, SearchSource};
    use scout_domain::storage::records::{FileOutcome, FileRecord};

    #[test]
    fn test_successful_search_record() {
        let response = SearchResponse::new(
            "rust",
            SearchSource::Google,
            SearchHits::new(vec![SearchResult::new("Rust", "https://rust-lang.org", "")]),
        );

        let result = into_tool_result("search_google", &response);

        assert!(result.is_success());
        assert_eq!(result.metadata.result_count, Some(1));
        let output = result.output_json().unwrap();
        assert_eq!(output["query"], "rust");
        assert_eq!(output["results"][0]["url"], "https://rust-lang.org");
    }

    #[test]
    fn test_failed_record_keeps_output() {
        let response = SearchResponse::failed("rust", SearchSource::Github, "HTTP 500");

        let result = into_tool_result("search_github", &response);

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "EXECUTION_FAILED");
        assert_eq!(error.message, "HTTP 500");
        assert_eq!(result.output_json().unwrap()["error"], "HTTP 500");
    }

    #[test]
    fn test_file_record_metadata() {
        let record: FileResponse = FileOutcome::Success(FileRecord {
            file_name: "a.txt".to_string(),
            path: "data/a.txt".to_string(),
            content: Some("abc".to_string()),
            size: 3,
        });

        let result = into_tool_result("read_from_file", &record);

        assert!(result.is_success());
        assert_eq!(result.metadata.path.as_deref(), Some("data/a.txt"));
        assert_eq!(result.metadata.bytes, Some(3));
    }
}
