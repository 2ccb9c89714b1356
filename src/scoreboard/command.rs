//! Commands - Request shapes a host sends to the scoreboard.
//!
//! Mirrors the three mutating operations so a UI or transport layer can
//! hand over deserialized requests and let `Scoreboard::execute` route them.
//!
//! ```ignore
//! let command: Command = serde_json::from_str(
//!     r#"{ "type": "startMatch", "homeTeam": "Mexico", "awayTeam": "Canada" }"#,
//! )?;
//! let outcome = board.execute(command)?;
//! ```

use serde::{Deserialize, Serialize};

use super::game::MatchId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartMatchRequest {
    pub home_team: String,
    pub away_team: String,
}

/// Scores are plain numbers here; negative or fractional values are
/// rejected by validation, not by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScoreRequest {
    pub match_id: String,
    pub home_score: f64,
    pub away_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishMatchRequest {
    pub match_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    StartMatch(StartMatchRequest),
    UpdateScore(UpdateScoreRequest),
    FinishMatch(FinishMatchRequest),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartMatch(_) => "startMatch",
            Command::UpdateScore(_) => "updateScore",
            Command::FinishMatch(_) => "finishMatch",
        }
    }
}

impl From<StartMatchRequest> for Command {
    fn from(request: StartMatchRequest) -> Self {
        Command::StartMatch(request)
    }
}

impl From<UpdateScoreRequest> for Command {
    fn from(request: UpdateScoreRequest) -> Self {
        Command::UpdateScore(request)
    }
}

impl From<FinishMatchRequest> for Command {
    fn from(request: FinishMatchRequest) -> Self {
        Command::FinishMatch(request)
    }
}

/// What an accepted command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Started(MatchId),
    Applied,
}

impl CommandOutcome {
    pub fn match_id(&self) -> Option<&MatchId> {
        match self {
            CommandOutcome::Started(id) => Some(id),
            CommandOutcome::Applied => None,
        }
    }
}
