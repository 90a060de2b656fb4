//! Local tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`LocalToolExecutor`] owns the immutable [`ToolSettings`], one shared
//! [`WebClient`] and the [`FileStore`], and routes each call to its tool.
//!
//! # Execution Path
//!
//! ```text
//! ToolExecutorPort::execute()
//!   ├─ resolve name (canonical or alias)  → NOT_FOUND
//!   ├─ validate arguments                 → INVALID_ARGUMENT
//!   └─ dispatch → record → ToolResult     → EXECUTION_FAILED if record has `error`
//!
//! ToolExecutorPort::execute_sync()
//!   └─ run_blocking(execute())            (tokio bridge)
//! ```

use async_trait::async_trait;
use scout_application::config::ToolSettings;
use scout_application::ports::tool_executor::ToolExecutorPort;
use scout_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use std::future::Future;
use std::time::Instant;

use super::file::{self, FileStore};
use super::http::{WebClient, WebError};
use super::record::into_tool_result;
use super::web;

/// Executor that runs the search, fetch and file-store tools in-process.
///
/// | Constructor | Tools | Use Case |
/// |-------------|-------|----------|
/// | [`new()`](Self::new) | All ten tools | Full agent |
/// | [`read_only()`](Self::read_only) | Everything but `write_to_file` | Hosts that must not write |
/// | [`with_tools()`](Self::with_tools) | Custom [`ToolSpec`] | Testing / specialized setups |
#[derive(Debug, Clone)]
pub struct LocalToolExecutor {
    tool_spec: ToolSpec,
    settings: ToolSettings,
    web: WebClient,
    store: FileStore,
}

impl LocalToolExecutor {
    /// Create an executor with all available tools.
    pub fn new(settings: ToolSettings) -> Result<Self, WebError> {
        Self::with_tools(super::default_tool_spec(), settings)
    }

    /// Create an executor with only read-only (low-risk) tools.
    pub fn read_only(settings: ToolSettings) -> Result<Self, WebError> {
        Self::with_tools(super::read_only_tool_spec(), settings)
    }

    /// Create an executor with a custom tool spec
    pub fn with_tools(tool_spec: ToolSpec, settings: ToolSettings) -> Result<Self, WebError> {
        let web = WebClient::new(settings.http.clone())?;
        let store = FileStore::new(settings.data_dir());
        Ok(Self {
            tool_spec,
            settings,
            web,
            store,
        })
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Run a validated call addressed by its canonical name.
    async fn dispatch(&self, name: &str, call: &ToolCall) -> ToolResult {
        // Required arguments are guaranteed present by validation
        let arg = |key: &str| call.get_string(key).unwrap_or_default();
        let sort = call.get_non_empty("sort");

        match name {
            web::SEARCH_GOOGLE => {
                let record = web::search_google(&self.web, &self.settings, arg("query")).await;
                into_tool_result(name, &record)
            }
            web::SEARCH_GITHUB => {
                let record =
                    web::search_github(&self.web, &self.settings, arg("query"), sort).await;
                into_tool_result(name, &record)
            }
            web::SEARCH_REDDIT => {
                let record =
                    web::search_reddit(&self.web, &self.settings, arg("query"), sort).await;
                into_tool_result(name, &record)
            }
            web::SEARCH_SUBREDDIT => {
                let record = web::search_subreddit(
                    &self.web,
                    &self.settings,
                    arg("subreddit"),
                    arg("query"),
                    sort,
                )
                .await;
                into_tool_result(name, &record)
            }
            web::SEARCH_STACKOVERFLOW => {
                let record =
                    web::search_stackoverflow(&self.web, &self.settings, arg("query"), sort).await;
                into_tool_result(name, &record)
            }
            web::SEARCH_WIKIPEDIA => {
                let record = web::search_wikipedia(&self.web, &self.settings, arg("query")).await;
                into_tool_result(name, &record)
            }
            web::FETCH_URL_CONTENT => {
                let record = web::fetch_url_content(&self.web, arg("url")).await;
                into_tool_result(name, &record)
            }
            file::WRITE_TO_FILE => {
                let record = file::write_to_file(&self.store, arg("file_name"), arg("content"));
                into_tool_result(name, &record)
            }
            file::READ_FROM_FILE => {
                let record = file::read_from_file(&self.store, arg("file_name"));
                into_tool_result(name, &record)
            }
            file::GET_CURRENT_DATA_FILES => {
                let record = file::get_current_data_files(&self.store);
                into_tool_result(name, &record)
            }
            _ => ToolResult::failure(
                name,
                ToolError::execution_failed(format!("Tool '{}' is not implemented", name)),
            ),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(definition) = self.tool_spec.get_resolved(&call.tool_name) else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::unknown_tool(&call.tool_name),
            );
        };
        let name = definition.name.as_str();
        if name != call.tool_name {
            tracing::trace!(alias = %call.tool_name, tool = name, "Resolved tool alias");
        }

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(name, ToolError::invalid_argument(e));
        }

        let start = Instant::now();
        let result = self.dispatch(name, call).await;
        let elapsed = start.elapsed().as_millis() as u64;
        tracing::debug!(tool = name, success = result.is_success(), duration_ms = elapsed, "Tool executed");

        result.with_duration(elapsed)
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        run_blocking(&call.tool_name, self.execute(call))
    }
}

/// Drive a tool future to completion from synchronous code.
///
/// Inside a multi-thread runtime the current worker is handed off with
/// `block_in_place`; a current-thread runtime cannot be blocked, so the call
/// fails instead. Outside any runtime a temporary one is built.
pub(crate) fn run_blocking<F>(tool_name: &str, future: F) -> ToolResult
where
    F: Future<Output = ToolResult>,
{
    use tokio::runtime::{Builder, Handle, RuntimeFlavor};

    match Handle::try_current() {
        Ok(handle) => match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => ToolResult::failure(
                tool_name,
                ToolError::execution_failed(
                    "execute_sync cannot block a current-thread runtime; use execute instead",
                ),
            ),
            _ => tokio::task::block_in_place(|| handle.block_on(future)),
        },
        Err(_) => match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime.block_on(future),
            Err(e) => ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to start async runtime: {}", e)),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_application::config::Endpoints;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_in(dir: &TempDir) -> ToolSettings {
        ToolSettings::default().with_data_dir(dir.path().join("data"))
    }

    #[test]
    fn test_executor_has_all_tools() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        assert_eq!(executor.available_tools().len(), 10);
        assert!(executor.has_tool("search_google"));
        assert!(executor.has_tool("write_to_file"));
        assert!(executor.has_tool("search_reddit_r"));
        assert!(executor.has_tool("web_search"));
    }

    #[test]
    fn test_executor_read_only() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::read_only(settings_in(&dir)).unwrap();

        assert!(executor.has_tool("read_from_file"));
        assert!(!executor.has_tool("write_to_file"));
        assert!(!executor.has_tool("write_file"));

        let call = ToolCall::new("write_file")
            .with_arg("file_name", "a.txt")
            .with_arg("content", "x");
        let result = executor.execute_sync(&call);
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(!executor.store().root().exists());
    }

    #[test]
    fn test_executor_unknown_tool() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor.execute_sync(&ToolCall::new("search_bing"));

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_executor_validation_error() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor.execute_sync(&ToolCall::new("search_github"));
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");

        let call = ToolCall::new("search_github")
            .with_arg("query", "rust")
            .with_arg("page", 2);
        let result = executor.execute_sync(&call);
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_executor_file_round_trip_via_aliases() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let write = ToolCall::new("write_file")
            .with_arg("file_name", "../report.md")
            .with_arg("content", "findings");
        let result = executor.execute_sync(&write);
        assert!(result.is_success());
        assert_eq!(result.tool_name, "write_to_file");
        assert!(result.metadata.duration_ms.is_some());

        let read = ToolCall::new("read_file").with_arg("file_name", "report.md");
        let output = executor.execute_sync(&read).output_json().unwrap();
        assert_eq!(output["content"], "findings");
        assert_eq!(output["size"], 8);

        let list = executor.execute_sync(&ToolCall::new("list_files"));
        assert_eq!(list.output_json().unwrap()["files"], json!(["report.md"]));
        assert_eq!(list.metadata.result_count, Some(1));
    }

    #[test]
    fn test_executor_file_error_record() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor.execute_sync(&ToolCall::new("read_from_file").with_arg("file_name", "nope"));

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
        assert_eq!(
            result.output_json().unwrap(),
            json!({"status": "error", "error": "File not found"})
        );
    }

    #[tokio::test]
    async fn test_executor_routes_search_alias() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/r/rust/search.json"))
            .and(query_param("q", "tokio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"children": []}})))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let settings = settings_in(&dir).with_endpoints(Endpoints::all_at(server.uri()));
        let executor = LocalToolExecutor::new(settings).unwrap();

        let call = ToolCall::new("search_reddit_r")
            .with_arg("subreddit", "rust")
            .with_arg("query", "tokio")
            .with_arg("sort", "");
        let result = executor.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.tool_name, "search_subreddit");
        let output = result.output_json().unwrap();
        assert_eq!(output["subreddit"], "rust");
        assert_eq!(output["results"], json!([]));
    }

    #[tokio::test]
    async fn test_executor_failed_search_is_execution_failed() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor
            .execute(&ToolCall::new("google").with_arg("query", "rust"))
            .await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().message, "Missing SEARCH_API_KEY or GOOGLE_CSE_ID");
        assert_eq!(result.output_json().unwrap()["query"], "rust");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_execute_sync_inside_multi_thread_runtime() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor.execute_sync(&ToolCall::new("get_current_data_files"));

        assert!(result.is_success());
        assert_eq!(result.output_json().unwrap()["files"], json!([]));
    }

    #[tokio::test]
    async fn test_execute_sync_inside_current_thread_runtime_fails() {
        let dir = TempDir::new().unwrap();
        let executor = LocalToolExecutor::new(settings_in(&dir)).unwrap();

        let result = executor.execute_sync(&ToolCall::new("get_current_data_files"));

        assert_eq!(result.error().unwrap().code, "EXECUTION_FAILED");
    }
}
