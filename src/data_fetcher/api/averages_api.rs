use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_text;
use crate::data_fetcher::models::TeamAverages;
use crate::data_fetcher::processors::parse_averages_table;
use crate::error::AppError;

/// Fetches one per-team averages page and parses its stats table.
#[instrument(skip(client))]
pub async fn fetch_team_averages(client: &Client, url: &str) -> Result<TeamAverages, AppError> {
    let html = fetch_text(client, url).await?;
    let averages = parse_averages_table(&html, url)?;
    info!("Fetched averages for {} teams from {url}", averages.len());
    Ok(averages)
}
