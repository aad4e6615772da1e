//! Process-lifetime cache of per-team segment averages with a staleness window

use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::polling::AVERAGES_STALENESS_SECONDS;
use crate::data_fetcher::models::{Segment, TeamAverages};
use crate::data_fetcher::teams::resolve_team;

/// Cached first-half and second-half averages.
///
/// The two tables are independent; either may be empty. `last_refreshed`
/// only moves when a first-half fetch succeeds.
#[derive(Debug, Clone)]
pub struct AveragesCache {
    first_half: TeamAverages,
    second_half: TeamAverages,
    last_refreshed: Option<Instant>,
    staleness: Duration,
}

impl Default for AveragesCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(AVERAGES_STALENESS_SECONDS))
    }
}

impl AveragesCache {
    pub fn new(staleness: Duration) -> Self {
        Self {
            first_half: TeamAverages::new(),
            second_half: TeamAverages::new(),
            last_refreshed: None,
            staleness,
        }
    }

    /// True when never refreshed or when older than the staleness window at `now`.
    pub fn is_stale_at(&self, now: Instant) -> bool {
        let stale = match self.last_refreshed {
            None => true,
            Some(refreshed) => now.saturating_duration_since(refreshed) > self.staleness,
        };

        debug!(
            "Averages staleness check: last_refreshed={:?}, window={:?}, stale={}",
            self.last_refreshed.map(|t| now.saturating_duration_since(t)),
            self.staleness,
            stale
        );

        stale
    }

    pub fn is_stale(&self) -> bool {
        self.is_stale_at(Instant::now())
    }

    pub fn last_refreshed(&self) -> Option<Instant> {
        self.last_refreshed
    }

    /// Merges a freshly fetched first-half table and stamps the refresh time.
    pub fn apply_first_half(&mut self, table: TeamAverages, refreshed_at: Instant) {
        self.first_half.extend(table);
        self.last_refreshed = Some(refreshed_at);
    }

    /// Merges a freshly fetched second-half table. Does not touch the timestamp.
    pub fn apply_second_half(&mut self, table: TeamAverages) {
        self.second_half.extend(table);
    }

    pub fn table(&self, segment: Segment) -> Option<&TeamAverages> {
        match segment {
            Segment::FirstHalf => Some(&self.first_half),
            Segment::SecondHalf => Some(&self.second_half),
            Segment::FullGame => None,
        }
    }

    /// Average for `team_identifier` in `segment`, without any I/O.
    ///
    /// `None` when the identifier cannot be resolved, when the team has no
    /// recorded average, or for segments without a table.
    pub fn lookup(&self, team_identifier: &str, segment: Segment) -> Option<f64> {
        let market = resolve_team(team_identifier)?;
        let average = self.table(segment)?.get(market).copied();

        if average.is_none() {
            debug!("Could not find {segment} average for team: {market}");
        }

        average
    }
}
