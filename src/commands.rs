use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::monitor::Monitor;
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use std::path::Path;

pub const TERMINAL_TITLE: &str = "NBA Halftime";

/// Applies command line overrides on top of the loaded configuration.
pub fn apply_args(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(interval) = args.interval {
        config.poll_interval_seconds = interval;
    }
    config.validate()
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    Config::display().await
}

/// Handles the --init-config command.
///
/// Writes the default settings to `path` unless a file is already there.
/// Returns whether a file was written.
pub async fn handle_init_config_command(path: &str) -> Result<bool, AppError> {
    if Path::new(path).exists() {
        println!("Config file already exists at {path}");
        return Ok(false);
    }

    Config::default().save_to_path(path).await?;
    println!("Default config written to {path}");
    Ok(true)
}

/// Handles the --once command: a single poll cycle rendered without
/// clearing the screen, so the output stays in terminal history.
pub async fn handle_once_command(config: &Config) -> Result<(), AppError> {
    let mut monitor = Monitor::new(config)?;
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    let page = monitor.build_page(false).await;
    page.render_buffered(&mut stdout())?;
    Ok(())
}
