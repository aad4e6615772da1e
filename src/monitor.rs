//! Poll loop: fetch the scoreboard, evaluate every game against the team
//! averages and render the result until stopped.

use chrono::{DateTime, Local};
use reqwest::Client;
use std::io::Write;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::data_fetcher::api::{create_http_client_with_timeout, fetch_scoreboard};
use crate::data_fetcher::cache::AveragesProvider;
use crate::data_fetcher::models::Segment;
use crate::data_fetcher::processors::{GameSplits, TeamSplit, extract_game_splits};
use crate::error::AppError;
use crate::evaluator::{GameEvaluation, GameKind, TeamEvaluation};
use crate::ui::StatusPage;

/// Status label used for every completed game.
pub const FINAL_STATUS: &str = "FINAL";

/// Result of one poll cycle.
#[derive(Debug, Clone)]
pub struct ScoreboardSnapshot {
    pub live: Vec<GameEvaluation>,
    pub completed: Vec<GameEvaluation>,
    pub updated_at: DateTime<Local>,
}

impl ScoreboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.completed.is_empty()
    }
}

pub struct Monitor {
    client: Client,
    scoreboard_url: String,
    averages: AveragesProvider,
    poll_interval: Duration,
}

impl Monitor {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        let averages = AveragesProvider::new(client.clone(), config);
        Self::with_provider(client, config, averages)
    }

    pub fn with_provider(client: Client, config: &Config, averages: AveragesProvider) -> Self {
        Self {
            client,
            scoreboard_url: config.scoreboard_url.clone(),
            averages,
            poll_interval: config.poll_interval(),
        }
    }

    pub fn averages(&self) -> &AveragesProvider {
        &self.averages
    }

    fn evaluate_team(&self, split: &TeamSplit) -> TeamEvaluation {
        let averages = self.averages.cache();
        let mut team = TeamEvaluation::new(split.name.clone()).with_segment(
            Segment::FirstHalf,
            split.first_half,
            averages.lookup(&split.lookup_key, Segment::FirstHalf),
        );

        if let Some(second_half) = split.second_half {
            team = team.with_segment(
                Segment::SecondHalf,
                second_half,
                averages.lookup(&split.lookup_key, Segment::SecondHalf),
            );
        }

        team
    }

    fn evaluate_game(&self, game: &GameSplits) -> GameEvaluation {
        let (kind, status) = if game.is_completed() {
            (GameKind::Completed, FINAL_STATUS.to_string())
        } else {
            (GameKind::Live, game.status_detail.clone())
        };

        let evaluation = GameEvaluation {
            kind,
            status,
            away: self.evaluate_team(&game.away),
            home: self.evaluate_team(&game.home),
        };

        if evaluation.is_emphasized() {
            info!(
                "Shared streak in game {}: {} @ {}",
                game.event_id, evaluation.away.name, evaluation.home.name
            );
        }

        evaluation
    }

    /// Runs one cycle: fetches the scoreboard and evaluates every game that
    /// has reached halftime.
    ///
    /// Stale averages are refreshed at most once per cycle, before any game
    /// is evaluated, and only when there is a game to evaluate. During an
    /// averages outage a cycle therefore costs one failed refresh rather
    /// than one per lookup.
    #[instrument(skip(self))]
    pub async fn poll_once(&mut self) -> Result<ScoreboardSnapshot, AppError> {
        let response = fetch_scoreboard(&self.client, &self.scoreboard_url).await?;
        let games = extract_game_splits(&response);

        if !games.is_empty() {
            self.averages.refresh_if_stale().await;
        }

        let mut live = Vec::new();
        let mut completed = Vec::new();
        for game in &games {
            let evaluation = self.evaluate_game(game);
            match evaluation.kind {
                GameKind::Live => live.push(evaluation),
                GameKind::Completed => completed.push(evaluation),
            }
        }

        debug!(
            "Poll cycle evaluated {} live and {} completed games",
            live.len(),
            completed.len()
        );

        Ok(ScoreboardSnapshot {
            live,
            completed,
            updated_at: Local::now(),
        })
    }

    /// Builds the page for one cycle. A failed scoreboard fetch becomes an
    /// error line on the page; it never ends the loop.
    pub async fn build_page(&mut self, clear_screen: bool) -> StatusPage {
        match self.poll_once().await {
            Ok(snapshot) => StatusPage::from_snapshot(&snapshot, clear_screen),
            Err(e) => {
                if e.is_retryable() {
                    warn!("Scoreboard fetch failed, retrying next cycle: {e}");
                } else {
                    error!("Scoreboard fetch failed: {e}");
                }
                let mut page = StatusPage::new(clear_screen, Local::now());
                page.add_error_message(&format!("Error fetching NBA scores: {e}"));
                page
            }
        }
    }

    /// Polls and renders until `stop` turns true or its sender is dropped.
    ///
    /// The stop signal is checked before every cycle and raced against the
    /// sleep between cycles. A request already in flight runs to completion.
    pub async fn run<W: Write>(
        &mut self,
        out: &mut W,
        mut stop: watch::Receiver<bool>,
        clear_screen: bool,
    ) -> Result<(), AppError> {
        info!(
            "Monitoring NBA halftime scores every {}s",
            self.poll_interval.as_secs()
        );
        writeln!(out, "\nMonitoring NBA Halftime Scores...")?;

        loop {
            if *stop.borrow() {
                break;
            }

            let page = self.build_page(clear_screen).await;
            page.render_buffered(out)?;

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                changed = stop.changed() => {
                    // A dropped sender also ends the loop
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Stopping score monitoring");
        writeln!(out, "\nStopping score monitoring...")?;
        out.flush()?;
        Ok(())
    }
}
