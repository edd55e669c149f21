//! Wire types for the league API.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ success, message?, data? }` wrapper used by every backend JSON response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Unwrap the payload, or turn `success: false` into [`LeagueError::Api`].
    ///
    /// `success: true` with `data` absent or `null` is [`LeagueError::MissingData`],
    /// never an empty payload.
    pub fn into_result(self) -> Result<T> {
        if !self.success {
            return Err(LeagueError::api(self.message));
        }
        self.data.ok_or(LeagueError::MissingData)
    }
}

/// Computed standings as produced by the backend.
///
/// The shape is owned by the backend, so the payload is kept as raw JSON and
/// handed back untouched. [`LeagueStandingsData::teams`] is a best-effort view
/// for text output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueStandingsData(pub Value);

impl LeagueStandingsData {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Teams under a top-level `teams` array, if the payload has that shape.
    pub fn teams(&self) -> Option<Vec<TeamStanding>> {
        let teams = self.0.get("teams")?;
        serde_json::from_value(teams.clone()).ok()
    }
}

/// One row of a standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
}

impl TeamStanding {
    /// Widened so counts near `u32::MAX` cannot overflow.
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses) + u64::from(self.ties.unwrap_or(0))
    }

    /// Winning percentage, ties counted as half a win. Zero before any game.
    pub fn win_pct(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + f64::from(self.ties.unwrap_or(0)) / 2.0) / played as f64
    }
}
