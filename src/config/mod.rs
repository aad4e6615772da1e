use crate::constants::{self, endpoints, env_vars, polling};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Every field has a default, so a missing or partial config file still
/// yields a working setup pointed at the public endpoints.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Live scoreboard JSON endpoint.
    pub scoreboard_url: String,
    /// Stats page holding the first-half points per game table.
    pub first_half_averages_url: String,
    /// Stats page holding the second-half points per game table.
    pub second_half_averages_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every request.
    pub http_timeout_seconds: u64,
    /// Seconds to wait between scoreboard polls.
    pub poll_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scoreboard_url: endpoints::SCOREBOARD_URL.to_string(),
            first_half_averages_url: endpoints::FIRST_HALF_AVERAGES_URL.to_string(),
            second_half_averages_url: endpoints::SECOND_HALF_AVERAGES_URL.to_string(),
            log_file_path: None,
            http_timeout_seconds: constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            poll_interval_seconds: polling::DEFAULT_POLL_INTERVAL_SECONDS,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NBA_HALFTIME_LOG_FILE` - Override log file path
    /// - `NBA_HALFTIME_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads the file at `path` (or defaults if it is missing), applies
    /// environment overrides and validates the result.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Scoreboard:");
        println!("{}", config.scoreboard_url);
        println!("First Half Averages:");
        println!("{}", config.first_half_averages_url);
        println!("Second Half Averages:");
        println!("{}", config.second_half_averages_url);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("Poll Interval:");
        println!("{} seconds", config.poll_interval_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }
}
