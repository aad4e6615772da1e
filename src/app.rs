use crate::cli::Args;
use crate::commands::TERMINAL_TITLE;
use crate::config::Config;
use crate::error::AppError;
use crate::monitor::Monitor;
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;
use tokio::sync::watch;
use tracing::{info, warn};

/// Run the continuous monitoring flow.
///
/// - Wires Ctrl+C into the monitor's stop signal
/// - Clears the screen between polls unless in debug mode
/// - Returns once the loop has stopped cleanly
pub async fn run_monitor(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut monitor = Monitor::new(config)?;
    let mut out = stdout();
    execute!(out, SetTitle(TERMINAL_TITLE))?;

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            // Dropping the sender would stop the loop; keep it alive instead
            std::future::pending::<()>().await;
        }
        info!("Ctrl+C received");
        let _ = stop_tx.send(true);
    });

    monitor.run(&mut out, stop_rx, !args.debug).await
}
