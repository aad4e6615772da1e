// src/main.rs
use clap::Parser;
use nba_halftime::app::run_monitor;
use nba_halftime::cli::{Args, is_config_command};
use nba_halftime::commands::{
    apply_args, handle_init_config_command, handle_list_config_command, handle_once_command,
};
use nba_halftime::config::Config;
use nba_halftime::error::AppError;
use nba_halftime::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if is_config_command(&args) {
        if args.init_config {
            handle_init_config_command(&Config::get_config_path()).await?;
        }
        if args.list_config {
            handle_list_config_command().await?;
        }
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    apply_args(&mut config, &args)?;

    if args.once {
        return handle_once_command(&config).await;
    }

    run_monitor(&args, &config).await
}
