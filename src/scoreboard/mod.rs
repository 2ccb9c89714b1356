mod clock;
mod command;
mod config;
mod game;
mod ranking;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use command::{
    Command, CommandOutcome, FinishMatchRequest, StartMatchRequest, UpdateScoreRequest,
};
pub use config::ScoreboardConfig;
pub use game::{normalize_team_name, Match, MatchId};
pub use ranking::{compare, Summary, TieBreak};
pub use store::Scoreboard;
