pub mod game_splits;
pub mod stats_table;

pub use game_splits::{GameSplits, TeamSplit, extract_game_splits};
pub use stats_table::parse_averages_table;
