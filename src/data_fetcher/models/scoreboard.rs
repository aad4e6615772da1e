//! Serde models for the live scoreboard feed.
//!
//! Every field is defaulted: the feed omits whole sub-objects for games
//! that have not started. Events are decoded one at a time so a single
//! odd event is dropped without failing the whole payload, and scalar
//! fields tolerate `null` and number/string mix-ups.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use tracing::warn;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreboardResponse {
    #[serde(default, deserialize_with = "lenient_events")]
    pub events: Vec<ScoreboardEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreboardEvent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(default)]
    pub status: EventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Competitor {
    #[serde(rename = "homeAway", default)]
    pub home_away: Option<String>,
    #[serde(default)]
    pub team: ScoreboardTeam,
    /// Sent as a string ("110") by the feed; numbers are tolerated too.
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default, deserialize_with = "lenient_line_scores")]
    pub linescores: Vec<LineScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreboardTeam {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

/// Decodes one event of the `events` array.
pub fn decode_event(value: Value) -> Result<ScoreboardEvent, AppError> {
    Ok(serde_json::from_value(value)?)
}

/// `events` must be an array (or absent/null); events that fail to decode
/// are logged and dropped.
fn lenient_events<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<ScoreboardEvent>, D::Error> {
    let values = match Value::deserialize(d)? {
        Value::Array(values) => values,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(de::Error::custom(format!(
                "expected an array of events, got {other}"
            )));
        }
    };

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match decode_event(value) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping malformed scoreboard event #{index}: {e}");
                None
            }
        })
        .collect())
}

/// Strings pass through, numbers are rendered, anything else is empty.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accepts `[{"value": 25}, ...]` as well as bare values (`[25, "26"]`).
/// Anything that is not an array yields no periods.
fn lenient_line_scores<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<LineScore>, D::Error> {
    let Value::Array(values) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };

    Ok(values
        .into_iter()
        .map(|value| match value {
            Value::Object(mut entry) => LineScore {
                value: entry.remove("value"),
            },
            bare => LineScore { value: Some(bare) },
        })
        .collect())
}

/// Points scored in one scoring period (a quarter or an overtime).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LineScore {
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStatus {
    #[serde(rename = "type", default)]
    pub status_type: StatusType,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusType {
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub detail: String,
}

/// Game state as reported by `status.type.state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Pre,
    In,
    Post,
}

/// Reads a number the feed may send either as JSON number or as string.
fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

impl LineScore {
    /// Points in this period; a missing or malformed value counts as zero.
    pub fn points(&self) -> f64 {
        self.value.as_ref().and_then(value_as_f64).unwrap_or(0.0)
    }
}

impl Competitor {
    /// Current (or final) total score, `None` when missing or non-numeric.
    pub fn total_score(&self) -> Option<f64> {
        self.score.as_ref().and_then(value_as_f64)
    }

    pub fn is_home(&self) -> bool {
        self.home_away.as_deref() == Some("home")
    }

    pub fn is_away(&self) -> bool {
        self.home_away.as_deref() == Some("away")
    }

    /// Team name for display, falling back to the full name and then the id.
    pub fn display_team_name(&self) -> &str {
        self.team
            .name
            .as_deref()
            .or(self.team.display_name.as_deref())
            .unwrap_or(&self.team.id)
    }
}

impl ScoreboardEvent {
    pub fn state(&self) -> GameState {
        match self.status.status_type.state.as_str() {
            "post" => GameState::Post,
            "in" => GameState::In,
            _ => GameState::Pre,
        }
    }

    pub fn status_detail(&self) -> &str {
        &self.status.status_type.detail
    }
}
