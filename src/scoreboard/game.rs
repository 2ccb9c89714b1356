use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque match identifier, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        MatchId(Uuid::new_v4().to_string())
    }

    /// The id as sent to and received from hosts.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MatchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.0
    }
}

impl PartialEq<str> for MatchId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MatchId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Trims surrounding whitespace and lower-cases a team name.
pub fn normalize_team_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A match between two teams.
///
/// Values are never edited in place: score updates and finishing produce a
/// new `Match`, leaving earlier copies (for example inside a summary already
/// handed to a caller) untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    home_score: u64,
    away_score: u64,
    start_time: DateTime<Utc>,
    sequence: u64,
    is_finished: bool,
}

impl Match {
    /// New unfinished match at 0-0. Team names must already be normalized.
    pub(crate) fn start(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        start_time: DateTime<Utc>,
        sequence: u64,
    ) -> Self {
        Match {
            id: MatchId::generate(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            start_time,
            sequence,
            is_finished: false,
        }
    }

    /// Identifier assigned when the match started.
    pub fn id(&self) -> &MatchId {
        &self.id
    }

    /// Normalized home team name.
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    /// Normalized away team name.
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u64 {
        self.home_score
    }

    pub fn away_score(&self) -> u64 {
        self.away_score
    }

    /// Sum of both scores, saturating at `u64::MAX`.
    pub fn total_score(&self) -> u64 {
        self.home_score.saturating_add(self.away_score)
    }

    /// When the match was started, per the scoreboard's clock.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Position in the order matches were started on their scoreboard.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// Still listed in the summary.
    pub fn is_active(&self) -> bool {
        !self.is_finished
    }

    /// Copy of this match carrying the given scores.
    pub(crate) fn with_scores(&self, home_score: u64, away_score: u64) -> Self {
        Match {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    /// Copy of this match marked finished.
    pub(crate) fn finished(&self) -> Self {
        Match {
            is_finished: true,
            ..self.clone()
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
