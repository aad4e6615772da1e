//! Averages provider: owns the averages cache and refreshes it from the
//! stats site when it goes stale.

use reqwest::Client;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

use super::averages_cache::AveragesCache;
use crate::config::Config;
use crate::data_fetcher::api::fetch_team_averages;
use crate::data_fetcher::models::Segment;
use crate::error::AppError;

pub struct AveragesProvider {
    client: Client,
    first_half_url: String,
    second_half_url: String,
    cache: AveragesCache,
}

impl AveragesProvider {
    pub fn new(client: Client, config: &Config) -> Self {
        Self::with_cache(client, config, AveragesCache::default())
    }

    /// Builds a provider around an existing cache, e.g. one with a custom
    /// staleness window.
    pub fn with_cache(client: Client, config: &Config, cache: AveragesCache) -> Self {
        Self {
            client,
            first_half_url: config.first_half_averages_url.clone(),
            second_half_url: config.second_half_averages_url.clone(),
            cache,
        }
    }

    pub fn cache(&self) -> &AveragesCache {
        &self.cache
    }

    /// Fetches both averages tables.
    ///
    /// Each table is fetched independently and a failure leaves that table
    /// as it was. The refresh timestamp moves only when the first-half
    /// fetch succeeds. Returns the first-half failure, if any, so callers
    /// can tell whether the refresh counted.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        info!("Refreshing team averages");

        let first_half = match fetch_team_averages(&self.client, &self.first_half_url).await {
            Ok(table) => {
                info!("Updated first half averages: {} teams", table.len());
                self.cache.apply_first_half(table, Instant::now());
                Ok(())
            }
            Err(e) => {
                error!("Error updating first half averages: {e}");
                Err(e)
            }
        };

        match fetch_team_averages(&self.client, &self.second_half_url).await {
            Ok(table) => {
                info!("Updated second half averages: {} teams", table.len());
                self.cache.apply_second_half(table);
            }
            Err(e) => error!("Error updating second half averages: {e}"),
        }

        first_half
    }

    /// Refreshes when the cache is stale. Failures are logged and swallowed:
    /// lookups fall back to whatever the cache already holds.
    pub async fn refresh_if_stale(&mut self) {
        if !self.cache.is_stale() {
            return;
        }

        if let Err(e) = self.refresh().await {
            warn!("Averages refresh failed, keeping cached values: {e}");
        }
    }

    /// Average for `team_identifier` in `segment`, refreshing first if stale.
    /// `None` means no data, never a fault.
    pub async fn lookup(&mut self, team_identifier: &str, segment: Segment) -> Option<f64> {
        self.refresh_if_stale().await;
        self.cache.lookup(team_identifier, segment)
    }
}
