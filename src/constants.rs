//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and default endpoints so the
//! rest of the codebase can refer to them by name.

/// Default timeout for HTTP requests in seconds.
/// A request that exceeds it counts as a failed fetch and stale data is kept.
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections kept per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// The stats site answers default client agents with an error page
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "nba_halftime.log";

/// Default data source endpoints
pub mod endpoints {
    /// Live NBA scoreboard JSON
    pub const SCOREBOARD_URL: &str =
        "https://site.api.espn.com/apis/site/v2/sports/basketball/nba/scoreboard";

    /// First-half points per game table
    pub const FIRST_HALF_AVERAGES_URL: &str =
        "https://www.teamrankings.com/nba/stat/1st-half-points-per-game";

    /// Second-half points per game table
    pub const SECOND_HALF_AVERAGES_URL: &str =
        "https://www.teamrankings.com/nba/stat/2nd-half-points-per-game";
}

/// Polling and cache timing
pub mod polling {
    /// Seconds between scoreboard fetches
    pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 30;

    /// Age after which cached averages are refreshed before use (one hour)
    pub const AVERAGES_STALENESS_SECONDS: u64 = 3600;
}

/// Performance classification thresholds, in percent
pub mod rating {
    /// At or above this difference a team is running hot
    pub const HOT_THRESHOLD_PCT: f64 = 5.0;

    /// At or below this difference a team is running cold
    pub const COLD_THRESHOLD_PCT: f64 = -5.0;
}

/// Console layout
pub mod ui {
    /// Width of the dashed rule under section headers
    pub const SECTION_RULE_WIDTH: usize = 50;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NBA_HALFTIME_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NBA_HALFTIME_HTTP_TIMEOUT";
}

/// Markup details of the averages source
pub mod stats_table {
    /// CSS selector of the stats table
    pub const TABLE_SELECTOR: &str = "table.tr-table";

    /// Column holding the team's market name
    pub const TEAM_COLUMN: usize = 1;

    /// Column holding the season average
    pub const VALUE_COLUMN: usize = 2;
}
