//! Integration tests for the scoreboard operations and summary ranking.

mod summary;

use chrono::{Duration, TimeZone, Utc};
use scoreboard::{ManualClock, MatchId, Scoreboard};

/// Scoreboard on a frozen clock, plus a handle to move that clock.
pub fn board() -> (Scoreboard<ManualClock>, ManualClock) {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap());
    (Scoreboard::new().with_clock(clock.clone()), clock)
}

/// Starts a match a minute after the previous one and sets its score.
pub fn play(
    board: &mut Scoreboard<ManualClock>,
    clock: &ManualClock,
    home: &str,
    away: &str,
    score: (u32, u32),
) -> MatchId {
    clock.advance(Duration::minutes(1));
    let id = board.start(home, away).unwrap();
    board.update_score(&id, score.0, score.1).unwrap();
    id
}
