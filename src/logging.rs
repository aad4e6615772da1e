use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "nba_halftime=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Splits a custom log path into directory and file name, falling back to
/// the default directory and file name.
fn resolve_log_location(custom_path: Option<&String>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging for the application.
///
/// - Logs always go to a daily rolling file
/// - In debug mode they are echoed to stdout too
/// - `--log-file` wins over the config file's `log_file_path`
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let (log_dir, log_file_name) =
        resolve_log_location(args.log_file.as_ref().or(config_log_path.as_ref()));

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter());

    let registry = tracing_subscriber::registry().with(file_layer);

    let init_result = if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()),
            )
            .try_init()
    } else {
        registry.try_init()
    };

    init_result.map_err(|e| AppError::log_setup_error(format!("Failed to set up logging: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
