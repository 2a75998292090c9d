use crate::catalog::Block;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL used when neither configuration nor the build environment
/// provide one
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides `api.base_url` directly
pub const BASE_URL_ENV: &str = "GSCORES_API_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GScoresConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the scoring API, e.g. `https://scores.example.com/api`
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Block shown in the top-students table on first load
    pub default_block: Block,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Baked in at build time for front ends that have no runtime
            // environment (wasm)
            base_url: option_env!("GSCORES_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_block: Block::A,
        }
    }
}

impl Default for GScoresConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl GScoresConfig {
    /// Get default configuration file paths in order of preference
    /// Uses XDG Base Directory specification
    #[must_use]
    pub fn get_default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("gscores.toml"),
            PathBuf::from("config/gscores.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("gscores").join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".gscores.toml"));
        }

        paths
    }

    /// Load configuration from multiple sources with priority:
    /// 1. `GSCORES_API_BASE_URL` (highest priority)
    /// 2. `GSCORES_*` environment variables (`__` separates nested keys)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file::<&str>(None)
    }

    /// Load configuration with a specific config file
    pub fn load_with_file<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(file_path) = config_file {
            let file_path = file_path.as_ref();
            if !file_path.exists() {
                return Err(ConfigError::Message(format!(
                    "Config file not found: {}",
                    file_path.display()
                )));
            }
            builder = builder.add_source(File::from(file_path));
        } else if let Some(config_path) = Self::get_default_config_paths()
            .into_iter()
            .find(|path| path.exists())
        {
            log::debug!("Using config file {}", config_path.display());
            builder = builder.add_source(File::from(config_path));
        }

        builder = builder
            .add_source(
                Environment::with_prefix("GSCORES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", std::env::var(BASE_URL_ENV).ok())?;

        builder.build()?.try_deserialize()
    }
}
