pub mod averages;
pub mod scoreboard;

pub use averages::{Segment, TeamAverages};
pub use scoreboard::{
    Competition, Competitor, EventStatus, GameState, LineScore, ScoreboardEvent,
    ScoreboardResponse, ScoreboardTeam, StatusType,
};
