//! Extraction of per-team segment scores from the live scoreboard.

use tracing::{debug, warn};

use crate::data_fetcher::models::{
    Competitor, GameState, ScoreboardEvent, ScoreboardResponse, Segment,
};
use crate::evaluator::compute_segment_score;

/// Segment scores for one team in one game.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSplit {
    /// Name shown on the console
    pub name: String,
    /// Identifier handed to the averages lookup
    pub lookup_key: String,
    pub first_half: f64,
    /// Only present for completed games
    pub second_half: Option<f64>,
}

/// A game that has reached at least halftime.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSplits {
    pub event_id: String,
    pub state: GameState,
    pub status_detail: String,
    pub home: TeamSplit,
    pub away: TeamSplit,
}

impl GameSplits {
    pub fn is_completed(&self) -> bool {
        self.state == GameState::Post
    }
}

/// Picks home and away by `homeAway`, falling back to list order
/// (home first) when the feed leaves the field out.
fn home_and_away(competitors: &[Competitor]) -> Option<(&Competitor, &Competitor)> {
    let home = competitors.iter().find(|c| c.is_home());
    let away = competitors.iter().find(|c| c.is_away());
    match (home, away) {
        (Some(home), Some(away)) => Some((home, away)),
        _ => match competitors {
            [home, away, ..] => Some((home, away)),
            _ => None,
        },
    }
}

fn team_split(competitor: &Competitor, completed: bool) -> Option<TeamSplit> {
    let first_half =
        compute_segment_score(&competitor.linescores, None, Segment::FirstHalf)?;

    let second_half = if completed {
        let final_score = competitor.total_score()?;
        Some(compute_segment_score(
            &competitor.linescores,
            Some(final_score),
            Segment::SecondHalf,
        )?)
    } else {
        None
    };

    // The feed's numeric ids do not follow the 1-30 code table, so the
    // nickname is the more reliable key; the id is the fallback.
    let lookup_key = competitor
        .team
        .name
        .clone()
        .unwrap_or_else(|| competitor.team.id.clone());

    Some(TeamSplit {
        name: competitor.display_team_name().to_string(),
        lookup_key,
        first_half,
        second_half,
    })
}

fn extract_event(event: &ScoreboardEvent) -> Option<GameSplits> {
    let competition = event.competitions.first()?;
    let (home, away) = home_and_away(&competition.competitors)?;
    let state = event.state();
    let completed = state == GameState::Post;

    let home = team_split(home, completed)?;
    let away = team_split(away, completed)?;

    Some(GameSplits {
        event_id: event.id.clone(),
        state,
        status_detail: event.status_detail().to_string(),
        home,
        away,
    })
}

/// Returns every game with usable halftime data, in feed order.
///
/// Games without two competitors, with fewer than two periods, or (when
/// completed) without a numeric final score are skipped; the rest are kept.
pub fn extract_game_splits(response: &ScoreboardResponse) -> Vec<GameSplits> {
    let games: Vec<GameSplits> = response
        .events
        .iter()
        .filter_map(|event| {
            let splits = extract_event(event);
            if splits.is_none() {
                if event.state() == GameState::Post {
                    warn!("Skipping completed game {} ({}): incomplete score data", event.id, event.name);
                } else {
                    debug!("Skipping game {} ({}): no halftime score yet", event.id, event.name);
                }
            }
            splits
        })
        .collect();

    debug!(
        "Extracted {} games with halftime scores out of {} events",
        games.len(),
        response.events.len()
    );

    games
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(events: serde_json::Value) -> ScoreboardResponse {
        serde_json::from_value(json!({ "events": events })).unwrap()
    }

    fn competitor(home_away: &str, name: &str, score: &str, lines: &[u32]) -> serde_json::Value {
        json!({
            "homeAway": home_away,
            "score": score,
            "team": {"id": "99", "name": name},
            "linescores": lines.iter().map(|v| json!({"value": v})).collect::<Vec<_>>()
        })
    }

    fn event(id: &str, state: &str, competitors: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "id": id,
            "status": {"type": {"state": state, "detail": "Halftime"}},
            "competitions": [{"competitors": competitors}]
        })
    }

    #[test]
    fn test_live_game_has_first_half_only() {
        let resp = response(json!([event(
            "1",
            "in",
            vec![
                competitor("home", "Lakers", "58", &[30, 28]),
                competitor("away", "Celtics", "51", &[25, 26]),
            ]
        )]));

        let games = extract_game_splits(&resp);
        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert!(!game.is_completed());
        assert_eq!(game.home.name, "Lakers");
        assert_eq!(game.home.first_half, 58.0);
        assert_eq!(game.away.first_half, 51.0);
        assert_eq!(game.home.second_half, None);
    }

    #[test]
    fn test_completed_game_has_both_halves() {
        let resp = response(json!([event(
            "2",
            "post",
            vec![
                competitor("home", "Lakers", "110", &[30, 25, 28, 27]),
                competitor("away", "Celtics", "95", &[24, 26, 20, 25]),
            ]
        )]));

        let games = extract_game_splits(&resp);
        let game = &games[0];
        assert!(game.is_completed());
        assert_eq!(game.home.first_half, 55.0);
        assert_eq!(game.home.second_half, Some(55.0));
        assert_eq!(game.away.first_half, 50.0);
        assert_eq!(game.away.second_half, Some(45.0));
    }

    #[test]
    fn test_home_away_from_field_not_order() {
        let resp = response(json!([event(
            "3",
            "in",
            vec![
                competitor("away", "Celtics", "51", &[25, 26]),
                competitor("home", "Lakers", "58", &[30, 28]),
            ]
        )]));

        let game = &extract_game_splits(&resp)[0];
        assert_eq!(game.home.name, "Lakers");
        assert_eq!(game.away.name, "Celtics");
    }

    #[test]
    fn test_position_fallback_without_home_away() {
        let resp = response(json!([{
            "id": "4",
            "status": {"type": {"state": "in", "detail": "3rd Qtr"}},
            "competitions": [{"competitors": [
                {"team": {"id": "14"}, "score": "60", "linescores": [{"value": 30}, {"value": 30}]},
                {"team": {"id": "2"}, "score": "50", "linescores": [{"value": 25}, {"value": 25}]}
            ]}]
        }]));

        let game = &extract_game_splits(&resp)[0];
        assert_eq!(game.home.lookup_key, "14");
        assert_eq!(game.away.lookup_key, "2");
        assert_eq!(game.status_detail, "3rd Qtr");
    }

    #[test]
    fn test_malformed_games_are_skipped_individually() {
        let resp = response(json!([
            // not started: no periods
            event("pre", "pre", vec![
                competitor("home", "Lakers", "0", &[]),
                competitor("away", "Celtics", "0", &[]),
            ]),
            // only one competitor
            event("solo", "in", vec![competitor("home", "Lakers", "30", &[30, 0])]),
            // completed with non-numeric final score
            event("bad", "post", vec![
                competitor("home", "Heat", "--", &[30, 25, 20, 20]),
                competitor("away", "Knicks", "90", &[20, 25, 20, 25]),
            ]),
            // fine
            event("ok", "in", vec![
                competitor("home", "Suns", "50", &[25, 25]),
                competitor("away", "Jazz", "48", &[24, 24]),
            ]),
        ]));

        let games = extract_game_splits(&resp);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].event_id, "ok");
    }
}
