//! Side-by-side evaluation of the two teams in one game.

use super::rating::{PerformanceRating, classify};
use crate::data_fetcher::models::Segment;

/// True when both teams carry the same hot or cold rating.
pub fn is_shared_streak(a: PerformanceRating, b: PerformanceRating) -> bool {
    a == b && a.is_streak()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentResult {
    pub segment: Segment,
    pub score: f64,
    pub expected: Option<f64>,
    pub rating: PerformanceRating,
}

/// One team's segment scores with their ratings, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamEvaluation {
    pub name: String,
    pub segments: Vec<SegmentResult>,
}

impl TeamEvaluation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            segments: Vec::new(),
        }
    }

    /// Adds a segment score and classifies it against `expected`.
    pub fn with_segment(mut self, segment: Segment, score: f64, expected: Option<f64>) -> Self {
        self.segments.push(SegmentResult {
            segment,
            score,
            expected,
            rating: classify(score, expected),
        });
        self
    }

    pub fn rating(&self, segment: Segment) -> Option<PerformanceRating> {
        self.segments
            .iter()
            .find(|s| s.segment == segment)
            .map(|s| s.rating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Live,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameEvaluation {
    pub kind: GameKind,
    /// Status label shown after the scores ("Halftime", "FINAL", ...)
    pub status: String,
    pub away: TeamEvaluation,
    pub home: TeamEvaluation,
}

impl GameEvaluation {
    /// A game is emphasized when, for some segment, both teams share the
    /// same hot or cold rating.
    pub fn is_emphasized(&self) -> bool {
        self.away.segments.iter().any(|away| {
            self.home
                .rating(away.segment)
                .is_some_and(|home| is_shared_streak(away.rating, home))
        })
    }
}
