//! NBA Halftime Score Tracker Library
//!
//! Polls the live NBA scoreboard, compares each team's half-by-half points
//! with its season averages and renders annotated status lines.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_halftime::config::Config;
//! use nba_halftime::error::AppError;
//! use nba_halftime::monitor::Monitor;
//! use nba_halftime::ui::StatusPage;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let mut monitor = Monitor::new(&config)?;
//!
//!     // One poll cycle, rendered without clearing the screen
//!     let snapshot = monitor.poll_once().await?;
//!     let page = StatusPage::from_snapshot(&snapshot, false);
//!     page.render_buffered(&mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod monitor;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{AveragesCache, AveragesProvider, Segment, resolve_team};
pub use error::AppError;
pub use evaluator::{GameEvaluation, PerformanceRating, classify, compute_segment_score};
pub use monitor::{Monitor, ScoreboardSnapshot};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
