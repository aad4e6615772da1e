use std::fmt;

use crate::constants::rating::{COLD_THRESHOLD_PCT, HOT_THRESHOLD_PCT};

/// Categorical classification of actual vs. expected scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceRating {
    Hot,
    Cold,
    Neutral,
    NoData,
}

impl PerformanceRating {
    /// Console marker for the rating.
    pub fn marker(self) -> &'static str {
        match self {
            PerformanceRating::Hot => "🔥",
            PerformanceRating::Cold => "❄️",
            PerformanceRating::Neutral => "➖",
            PerformanceRating::NoData => "⚪",
        }
    }

    /// Hot and cold are the ratings worth highlighting.
    pub fn is_streak(self) -> bool {
        matches!(self, PerformanceRating::Hot | PerformanceRating::Cold)
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Classifies `actual` against the `expected` average.
///
/// Thresholds are inclusive: exactly +5% is hot and exactly -5% is cold.
/// A missing, zero, negative or non-finite expectation means there is
/// nothing to compare against.
pub fn classify(actual: f64, expected: Option<f64>) -> PerformanceRating {
    let expected = match expected {
        Some(expected) if expected.is_finite() && expected > 0.0 => expected,
        _ => return PerformanceRating::NoData,
    };

    let diff_pct = (actual - expected) / expected * 100.0;

    if diff_pct >= HOT_THRESHOLD_PCT {
        PerformanceRating::Hot
    } else if diff_pct <= COLD_THRESHOLD_PCT {
        PerformanceRating::Cold
    } else {
        PerformanceRating::Neutral
    }
}
