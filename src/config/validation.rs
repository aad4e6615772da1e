use crate::error::AppError;
use std::path::Path;

fn validate_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https://, got '{url}'"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every source URL must be non-empty and use http or https
/// - Timeout and poll interval must be positive
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &super::Config) -> Result<(), AppError> {
    validate_url("scoreboard_url", &config.scoreboard_url)?;
    validate_url("first_half_averages_url", &config.first_half_averages_url)?;
    validate_url("second_half_averages_url", &config.second_half_averages_url)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "http_timeout_seconds must be greater than zero",
        ));
    }

    if config.poll_interval_seconds == 0 {
        return Err(AppError::config_error(
            "poll_interval_seconds must be greater than zero",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
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
