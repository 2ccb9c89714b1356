//! Live match scoreboard.
//!
//! A [`Scoreboard`] owns the matches in progress. Starting, scoring and
//! finishing a match are each gated by a validator that collects every
//! violated rule; [`Scoreboard::matches`] returns the active matches ranked
//! by total score.
//!
//! ```ignore
//! use scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! let id = board.start("Mexico", "Canada")?;
//! board.update_score(&id, 0, 5)?;
//! for line in board.matches().lines() {
//!     println!("{}", line);
//! }
//! ```

#[cfg(feature = "emitter")]
pub mod emitter;
mod error;
pub mod scoreboard;
pub mod validation;

#[cfg(feature = "emitter")]
pub use emitter::{MatchEvent, MatchEvents};
pub use error::ValidationError;
pub use scoreboard::{
    normalize_team_name, Clock, Command, CommandOutcome, FinishMatchRequest, ManualClock, Match,
    MatchId, Scoreboard, ScoreboardConfig, StartMatchRequest, Summary, SystemClock, TieBreak,
    UpdateScoreRequest,
};
pub use validation::{Rule, ValidationResult};
