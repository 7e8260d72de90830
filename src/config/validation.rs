use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every endpoint must be an http(s) URL with a host
/// - HTTP timeout and cache TTL must be positive
/// - A season override must be a plausible year
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    for (name, url) in config.endpoints.entries() {
        validate_endpoint(name, url)?;
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be positive"));
    }

    if config.cache_ttl_seconds == 0 {
        return Err(AppError::config_error("Cache TTL must be positive"));
    }

    if let Some(season) = config.season
        && !(2000..=2100).contains(&season)
    {
        return Err(AppError::config_error(format!(
            "Season {season} is out of range (expected 2000-2100)"
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_endpoint(name: &str, url: &str) -> Result<(), AppError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Endpoint '{name}' must start with http:// or https:// (got '{url}')"
            ))
        })?;

    if host.trim_end_matches('/').is_empty() {
        return Err(AppError::config_error(format!(
            "Endpoint '{name}' has no host"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_mock_server_endpoints_are_valid() {
        let config = Config {
            endpoints: Endpoints::all_at("http://127.0.0.1:45678"),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let mut config = Config::default();
        config.endpoints.torvik = "barttorvik.com".to_string();
        assert!(matches!(validate_config(&config), Err(AppError::Config(_))));

        config.endpoints.torvik = "https://".to_string();
        assert!(matches!(validate_config(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_durations_and_bad_season() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            cache_ttl_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            season: Some(25),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_path_rules() {
        let config = Config {
            log_file_path: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("new_dir").join("cbb.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("new_dir").exists());
    }
}
