use serde::Deserialize;

use super::ranking::TieBreak;

/// Scoreboard settings.
///
/// ```ignore
/// let config = ScoreboardConfig::from_json(r#"{ "tieBreak": "oldestFirst" }"#)?;
/// let board = Scoreboard::with_config(config);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreboardConfig {
    pub tie_break: TieBreak,
}

impl ScoreboardConfig {
    /// Parse settings from JSON. Missing fields take their defaults;
    /// unknown fields are an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Override how equal totals are ordered.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
