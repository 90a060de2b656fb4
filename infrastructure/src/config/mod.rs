//! Configuration file loading for scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SCOUT_<SECTION>__<KEY>` environment variables
//! 2. `SEARCH_API_KEY` / `GOOGLE_CSE_ID` environment variables
//! 3. `--config <path>` specified file
//! 4. Project root: `./scout.toml` or `./.scout.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/scout/config.toml` (fallback `~/.config/scout/config.toml`)
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointsConfig, FileGoogleConfig, FileHttpConfig,
    FileStorageConfig,
};
pub use loader::ConfigLoader;
