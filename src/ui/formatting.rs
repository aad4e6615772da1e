//! Line formatting for evaluated games
//!
//! A live game shows first-half points only:
//! `Celtics 50 ➖ @ Lakers 55 🔥 - Halftime`
//!
//! A completed game shows both halves separated by slashes:
//! `Celtics 50/45 ➖/➖ @ Lakers 55/55 🔥/🔥 - FINAL`

use crate::evaluator::{GameEvaluation, TeamEvaluation};

/// Formats a point total. Whole numbers print without a decimal part.
pub fn format_points(points: f64) -> String {
    if points.fract() == 0.0 && points.is_finite() {
        format!("{points:.0}")
    } else {
        format!("{points:.1}")
    }
}

fn format_team(team: &TeamEvaluation) -> String {
    let scores: Vec<String> = team.segments.iter().map(|s| format_points(s.score)).collect();
    let markers: Vec<&str> = team.segments.iter().map(|s| s.rating.marker()).collect();
    format!("{} {} {}", team.name, scores.join("/"), markers.join("/"))
}

/// Formats one game as `Away <scores> <markers> @ Home <scores> <markers> - <status>`.
pub fn format_game_line(game: &GameEvaluation) -> String {
    format!(
        "{} @ {} - {}",
        format_team(&game.away),
        format_team(&game.home),
        game.status
    )
}
