use crate::constants::{endpoints, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for provider requests. Defaults to 20 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// How long an aggregated snapshot is served from cache. Defaults to 4 hours.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Season year override (e.g. 2025 for the 2024-25 season).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
    /// Provider base URLs.
    #[serde(default)]
    pub endpoints: Endpoints,
}

/// Base URLs of the ranking providers, without trailing slash.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Endpoints {
    #[serde(default = "default_ncaa")]
    pub ncaa: String,
    #[serde(default = "default_ncaa_ratings")]
    pub ncaa_ratings: String,
    #[serde(default = "default_warren_nolan")]
    pub warren_nolan: String,
    #[serde(default = "default_espn_site")]
    pub espn_site: String,
    #[serde(default = "default_torvik")]
    pub torvik: String,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_ttl() -> u64 {
    crate::constants::cache_ttl::RANKINGS_SECONDS
}

fn default_ncaa() -> String {
    endpoints::NCAA.to_string()
}

fn default_ncaa_ratings() -> String {
    endpoints::NCAA_RATINGS.to_string()
}

fn default_warren_nolan() -> String {
    endpoints::WARREN_NOLAN.to_string()
}

fn default_espn_site() -> String {
    endpoints::ESPN_SITE.to_string()
}

fn default_torvik() -> String {
    endpoints::TORVIK.to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            ncaa: default_ncaa(),
            ncaa_ratings: default_ncaa_ratings(),
            warren_nolan: default_warren_nolan(),
            espn_site: default_espn_site(),
            torvik: default_torvik(),
        }
    }
}

impl Endpoints {
    /// Points every provider at one base URL, e.g. a local mock server
    pub fn all_at(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Endpoints {
            ncaa: base.clone(),
            ncaa_ratings: base.clone(),
            warren_nolan: base.clone(),
            espn_site: base.clone(),
            torvik: base,
        }
    }

    /// `(name, url)` pairs in a fixed order, for validation and display
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("ncaa", self.ncaa.as_str()),
            ("ncaa_ratings", self.ncaa_ratings.as_str()),
            ("warren_nolan", self.warren_nolan.as_str()),
            ("espn_site", self.espn_site.as_str()),
            ("torvik", self.torvik.as_str()),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
            season: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `CBB_RANKINGS_LOG_FILE` - Override log file path
    /// - `CBB_RANKINGS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 20)
    /// - `CBB_RANKINGS_CACHE_TTL` - Override cache TTL in seconds (default: 14400)
    /// - `CBB_RANKINGS_SEASON` - Override the season year
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `CBB_RANKINGS_*` environment overrides. Unparseable numeric
    /// values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(ttl) = std::env::var(env_vars::CACHE_TTL)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.cache_ttl_seconds = ttl;
        }

        if let Some(season) = std::env::var(env_vars::SEASON)
            .ok()
            .and_then(|s| s.trim().parse::<i32>().ok())
        {
            self.season = Some(season);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and effective settings
    /// - Defaults are shown when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let has_file = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !has_file {
            println!("(No file yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Season:");
        match config.season {
            Some(season) => println!("{season}"),
            None => println!("Automatic"),
        }
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Cache TTL:");
        println!("{} seconds", config.cache_ttl_seconds);
        println!("────────────────────────────────────");
        println!("Endpoints:");
        for (name, url) in config.endpoints.entries() {
            println!("{name:<14}{url}");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/cbb_rankings.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. Trailing slashes are
    /// removed from endpoint URLs so URL builders can append paths directly.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut normalized = self.clone();
        for url in [
            &mut normalized.endpoints.ncaa,
            &mut normalized.endpoints.ncaa_ratings,
            &mut normalized.endpoints.warren_nolan,
            &mut normalized.endpoints.espn_site,
            &mut normalized.endpoints.torvik,
        ] {
            let trimmed = url.trim_end_matches('/').to_string();
            *url = trimmed;
        }

        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
