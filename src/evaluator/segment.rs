use crate::data_fetcher::models::{LineScore, Segment};

/// Aggregates a team's score over `segment`.
///
/// - First half: the sum of the first two periods. Fewer than two periods
///   gives `None` rather than a partial sum; a malformed period counts as 0.
/// - Second half: `final_score` minus the first half.
/// - Full game: `final_score`.
pub fn compute_segment_score(
    periods: &[LineScore],
    final_score: Option<f64>,
    segment: Segment,
) -> Option<f64> {
    match segment {
        Segment::FirstHalf => first_half(periods),
        Segment::SecondHalf => {
            let first = first_half(periods)?;
            final_score.map(|total| total - first)
        }
        Segment::FullGame => final_score,
    }
}

fn first_half(periods: &[LineScore]) -> Option<f64> {
    match periods {
        [first, second, ..] => Some(first.points() + second.points()),
        _ => None,
    }
}
