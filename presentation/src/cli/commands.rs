//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for scout
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author, version, about = "Search tools for LLM agents")]
#[command(long_about = r#"
Scout exposes web search, GitHub, Reddit, Stack Overflow and Wikipedia
search, URL fetching and a local file store as tools an LLM agent can call.
Every tool returns a JSON record; failures are reported in its "error" field.
--arg values are always strings; use --json for typed values.

Configuration files are loaded from (in priority order):
1. SCOUT_* environment variables (SCOUT_HTTP__TIMEOUT_SECS=5)
2. SEARCH_API_KEY / GOOGLE_CSE_ID
3. --config <path>     Explicit config file
4. ./scout.toml        Project-level config
5. ~/.config/scout/config.toml   Global config

Example:
  scout tools
  scout call search_github --arg query=tokio --arg sort=updated
  scout call web_fetch --json '{"url": "https://www.rust-lang.org"}'
  scout smoke "rust async"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Directory used by the file-store tools (overrides storage.data_dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available tools
    Tools(SpecArgs),

    /// Print the agent profile and the JSON schema of every tool
    Manifest(SpecArgs),

    /// Invoke one tool and print its JSON record
    Call(CallArgs),

    /// Run a Google search and summarize the response
    Smoke {
        /// Search query
        #[arg(default_value = "python programming")]
        query: String,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct SpecArgs {
    /// Exclude high-risk tools (write_to_file)
    #[arg(long)]
    pub read_only: bool,
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name (canonical or alias)
    pub tool: String,

    /// Argument as key=value; the value is taken verbatim as a string
    #[arg(short, long = "arg", value_name = "KEY=VALUE", value_parser = parse_arg)]
    pub args: Vec<(String, serde_json::Value)>,

    /// All arguments as one JSON object (merged before --arg)
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

/// Parse `key=value` into a string argument. Only the first `=` separates.
pub fn parse_arg(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }

    Ok((key.to_string(), serde_json::Value::String(value.to_string())))
}
