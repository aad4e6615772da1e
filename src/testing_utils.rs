//! Fixture builders for the scoreboard feed and the stats pages.
//!
//! Shared by unit tests and the integration tests under `tests/`.

use serde_json::{Value, json};

/// Builds one competitor entry of the scoreboard feed.
pub struct CompetitorBuilder {
    home_away: Option<String>,
    id: String,
    name: String,
    display_name: Option<String>,
    score: String,
    periods: Vec<u32>,
}

impl CompetitorBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            home_away: None,
            id: "0".to_string(),
            name: name.to_string(),
            display_name: None,
            score: "0".to_string(),
            periods: Vec::new(),
        }
    }

    pub fn home(mut self) -> Self {
        self.home_away = Some("home".to_string());
        self
    }

    pub fn away(mut self) -> Self {
        self.home_away = Some("away".to_string());
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    /// Period scores; the total score is set to their sum.
    pub fn periods(mut self, periods: &[u32]) -> Self {
        self.periods = periods.to_vec();
        self.score = periods.iter().sum::<u32>().to_string();
        self
    }

    /// Overrides the total score, e.g. with a non-numeric value.
    pub fn score(mut self, score: &str) -> Self {
        self.score = score.to_string();
        self
    }

    pub fn build(self) -> Value {
        let mut team = json!({ "id": self.id, "name": self.name });
        if let Some(display_name) = self.display_name {
            team["displayName"] = json!(display_name);
        }

        let mut competitor = json!({
            "team": team,
            "score": self.score,
            "linescores": self.periods.iter().map(|v| json!({ "value": v })).collect::<Vec<_>>(),
        });
        if let Some(home_away) = self.home_away {
            competitor["homeAway"] = json!(home_away);
        }
        competitor
    }
}

/// Builds one scoreboard event.
pub fn event(id: &str, state: &str, detail: &str, competitors: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": format!("Event {id}"),
        "status": { "type": { "state": state, "detail": detail } },
        "competitions": [{ "competitors": competitors }],
    })
}

/// A game in progress between `away` and `home`.
pub fn live_event(id: &str, detail: &str, away: CompetitorBuilder, home: CompetitorBuilder) -> Value {
    event(id, "in", detail, vec![home.home().build(), away.away().build()])
}

/// A finished game between `away` and `home`.
pub fn completed_event(id: &str, away: CompetitorBuilder, home: CompetitorBuilder) -> Value {
    event(id, "post", "Final", vec![home.home().build(), away.away().build()])
}

/// Wraps events into a full scoreboard document.
pub fn scoreboard(events: Vec<Value>) -> Value {
    json!({ "events": events })
}

/// An HTML page holding a stats table with a header row and one row per
/// `(market, value)` pair.
pub fn stats_page(rows: &[(&str, f64)]) -> String {
    let body: String = rows
        .iter()
        .enumerate()
        .map(|(i, (team, value))| {
            format!("<tr><td>{}</td><td>{team}</td><td>{value}</td></tr>", i + 1)
        })
        .collect();
    format!(
        r#"<html><body><table class="tr-table datatable"><thead><tr><th>Rank</th><th>Team</th><th>2024</th></tr></thead><tbody>{body}</tbody></table></body></html>"#
    )
}
