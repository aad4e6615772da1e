use std::collections::HashMap;
use std::fmt;

/// Average points scored per team in one segment, keyed by the stats
/// site's market name (e.g. "LA Lakers").
pub type TeamAverages = HashMap<String, f64>;

/// A portion of a game over which a score is aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    FirstHalf,
    SecondHalf,
    FullGame,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Segment::FirstHalf => "first half",
            Segment::SecondHalf => "second half",
            Segment::FullGame => "full game",
        };
        f.write_str(label)
    }
}
