//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_FILES: &[&str] = &["scout.toml", ".scout.toml"];

/// Prefix for environment overrides (`SCOUT_HTTP__TIMEOUT_SECS=5`)
const ENV_PREFIX: &str = "SCOUT_";

/// Unprefixed variables that carry the Google credentials
const GOOGLE_API_KEY_VAR: &str = "SEARCH_API_KEY";
const GOOGLE_CSE_ID_VAR: &str = "GOOGLE_CSE_ID";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SCOUT_*` environment variables (`__` separates sections)
    /// 2. `SEARCH_API_KEY` / `GOOGLE_CSE_ID`
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./scout.toml` or `./.scout.toml`
    /// 5. Global config: `$XDG_CONFIG_HOME/scout/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Self::google_env())
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn google_env() -> Env {
        Env::raw()
            .only(&[GOOGLE_API_KEY_VAR, GOOGLE_CSE_ID_VAR])
            .map(|key| {
                if key.as_str().eq_ignore_ascii_case(GOOGLE_API_KEY_VAR) {
                    "google.api_key".into()
                } else {
                    "google.cse_id".into()
                }
            })
    }

    /// Get the global config file path
    ///
    /// `$XDG_CONFIG_HOME/scout/config.toml` on Linux, the platform config
    /// directory elsewhere.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("scout").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}* (sections split by __)", ENV_PREFIX);
        println!("  [     ] Env:     {}, {}", GOOGLE_API_KEY_VAR, GOOGLE_CSE_ID_VAR);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./scout.toml or ./.scout.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
