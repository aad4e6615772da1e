//! Parsing of the per-team averages table on the stats site.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::constants::stats_table::{TABLE_SELECTOR, TEAM_COLUMN, VALUE_COLUMN};
use crate::data_fetcher::models::TeamAverages;
use crate::error::AppError;

fn selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::config_error(format!("Invalid CSS selector '{css}': {e}")))
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extracts team name → average from the stats table in `html`.
///
/// The first row is the header and is skipped. Rows with fewer than three
/// cells or a non-numeric value are skipped with a warning; the table as a
/// whole still succeeds. A page without the table is an error.
pub fn parse_averages_table(html: &str, url: &str) -> Result<TeamAverages, AppError> {
    let document = Html::parse_document(html);
    let table_selector = selector(TABLE_SELECTOR)?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let Some(table) = document.select(&table_selector).next() else {
        let classes: Vec<String> = document
            .select(&selector("table")?)
            .map(|t| t.value().attr("class").unwrap_or("no-class").to_string())
            .collect();
        warn!("Stats table missing from {url}; tables present: {classes:?}");
        return Err(AppError::stats_table_missing(url));
    };

    let mut averages = TeamAverages::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() <= VALUE_COLUMN {
            continue;
        }

        let team_name = cell_text(&cells[TEAM_COLUMN]);
        let raw_value = cell_text(&cells[VALUE_COLUMN]);
        match raw_value.parse::<f64>() {
            Ok(average) if average.is_finite() && !team_name.is_empty() => {
                debug!("Parsed average for {team_name}: {average}");
                averages.insert(team_name, average);
            }
            Ok(_) => warn!("Skipping stats row with unusable values: {team_name:?} {raw_value:?}"),
            Err(e) => warn!("Error parsing average for {team_name}: {e} (value {raw_value:?})"),
        }
    }

    debug!("Parsed {} team averages from {url}", averages.len());
    Ok(averages)
}
