//! CLI entrypoint for scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use scout_application::{ToolExecutorPort, ToolSettings};
use scout_domain::{AgentProfile, ToolCall};
use scout_infrastructure::tools::web::SEARCH_GOOGLE;
use scout_infrastructure::{
    BuiltinProvider, ConfigLoader, FileConfig, JsonSchemaToolConverter, ToolRegistry,
};
use scout_presentation::{CallArgs, Cli, Command, ConsoleFormatter, SpecArgs};
use std::process::ExitCode;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout carries only records
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = load_settings(&cli)?;
    info!("Starting scout (data dir: {})", settings.data_dir().display());

    let Some(command) = cli.command else {
        bail!("No command given. Run `scout --help` for usage.");
    };

    match command {
        Command::Tools(args) => {
            let registry = build_registry(settings, args).await?;
            println!("{}", ConsoleFormatter::format_tools(registry.tool_spec()));
        }
        Command::Manifest(args) => {
            let registry = build_registry(settings, args).await?;
            let manifest = JsonSchemaToolConverter
                .agent_manifest(&AgentProfile::search_agent(), registry.tool_spec());
            println!("{}", ConsoleFormatter::format_json(&manifest));
        }
        Command::Call(args) => {
            let registry = build_registry(settings, SpecArgs { read_only: false }).await?;
            let call = build_call(args)?;
            let result = registry.execute(&call).await;

            println!("{}", ConsoleFormatter::format_result(&result));
            if let Some(error) = result.error() {
                warn!("{} failed: {}", call.tool_name, error);
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Smoke { query } => {
            let registry = build_registry(settings, SpecArgs { read_only: true }).await?;
            let call = ToolCall::new(SEARCH_GOOGLE).with_arg("query", query.as_str());
            let result = registry.execute(&call).await;

            let record = result.output_json().unwrap_or_default();
            print!("{}", ConsoleFormatter::format_smoke(&query, &record));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve the configuration layers into the settings every tool receives
fn load_settings(cli: &Cli) -> Result<ToolSettings> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config.validate().context("Invalid configuration")?;
    debug!("Loaded configuration: {:?}", redacted(&config));

    let mut settings = config.to_settings();
    if let Some(dir) = &cli.data_dir {
        settings = settings.with_data_dir(dir);
    }
    Ok(settings)
}

/// Config for logging, without the Google API key
fn redacted(config: &FileConfig) -> FileConfig {
    let mut config = config.clone();
    if config.google.api_key.is_some() {
        config.google.api_key = Some("***".to_string());
    }
    config
}

async fn build_registry(settings: ToolSettings, args: SpecArgs) -> Result<ToolRegistry> {
    // === Dependency Injection ===
    let provider = if args.read_only {
        BuiltinProvider::read_only(settings)?
    } else {
        BuiltinProvider::new(settings)?
    };

    let mut registry = ToolRegistry::new().register(provider);
    registry.discover().await?;

    let stats = registry.stats();
    debug!(
        "Registry ready: {} tools, {} aliases from {} providers",
        stats.total_tools, stats.total_aliases, stats.total_providers
    );
    Ok(registry)
}

/// `--json` object first, then each `--arg` on top
fn build_call(args: CallArgs) -> Result<ToolCall> {
    let base = match &args.json {
        Some(raw) => serde_json::from_str(raw).context("--json is not valid JSON")?,
        None => serde_json::Value::Null,
    };

    let call = ToolCall::from_json(args.tool, base).map_err(|e| anyhow!(e))?;
    Ok(args
        .args
        .into_iter()
        .fold(call, |call, (key, value)| call.with_arg(key, value)))
}
