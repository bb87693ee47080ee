//! # Configuration
//!
//! Layered settings for the CLI.
//!
//! ## Precedence (lowest to highest)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Built-in defaults        database_path = "nutrifit.db"             │
//! │                              log_level     = "warn"                    │
//! │  2. nutrifit.toml            ./nutrifit.toml if present, or the file   │
//! │                              named by --config (must exist)            │
//! │  3. Environment              NUTRIFIT_DATABASE_PATH, NUTRIFIT_LOG_LEVEL│
//! │  4. Command line             --db <path>                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG`, when set, still takes priority over `log_level` for the
//! tracing filter.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Default SQLite file, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "nutrifit.db";

/// Default tracing filter; keeps the menus free of log noise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Config file looked up in the working directory (any supported extension).
const DEFAULT_CONFIG_FILE: &str = "nutrifit";

const ENV_PREFIX: &str = "NUTRIFIT";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// SQLite database file, or `:memory:`.
    pub database_path: PathBuf,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("database_path must not be empty")]
    EmptyDatabasePath,
}

impl AppConfig {
    /// Loads configuration from every layer.
    ///
    /// ## Arguments
    /// * `config_file` - Explicit `--config` path; replaces `./nutrifit.toml`
    /// * `db_override` - `--db` path; wins over every other layer
    pub fn load(config_file: Option<&Path>, db_override: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        if let Some(path) = db_override {
            builder = builder.set_override("database_path", path.to_string_lossy().into_owned())?;
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        Ok(config)
    }
}
