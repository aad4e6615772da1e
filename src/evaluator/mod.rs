//! Score evaluation: segment aggregation, performance classification and
//! pairwise comparison of the two teams in a game.

pub mod comparison;
pub mod rating;
pub mod segment;

pub use comparison::{GameEvaluation, GameKind, TeamEvaluation, is_shared_streak};
pub use rating::{PerformanceRating, classify};
pub use segment::compute_segment_score;
