pub mod api;
pub mod cache;
pub mod models;
pub mod processors;
pub mod teams;

pub use api::{fetch_scoreboard, fetch_team_averages};
pub use cache::{AveragesCache, AveragesProvider};
pub use models::{ScoreboardResponse, Segment, TeamAverages};
pub use processors::{GameSplits, extract_game_splits};
pub use teams::resolve_team;
