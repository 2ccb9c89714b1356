//! Rule tables shared by the scoreboard validators.

use std::collections::HashSet;

use super::Rule;
use crate::scoreboard::Match;

pub const TEAM_NAME_MIN_LEN: usize = 2;

/// Shape rules applied to each normalized team name independently.
pub const TEAM_NAME_RULES: [Rule<str>; 3] = [
    Rule::new("team_name_required", is_present, "Team name is required"),
    Rule::new(
        "team_name_min_length",
        has_min_length,
        "Team name must be at least 2 characters long",
    ),
    Rule::new(
        "team_name_letters_and_spaces",
        is_letters_and_spaces,
        "Team name can only contain letters and spaces",
    ),
];

/// Value is the home team, context the away team.
pub const DIFFERENT_TEAMS_RULES: [Rule<str, str>; 1] = [Rule::with_context(
    "different_teams",
    differs_from,
    "Home and away teams must be different",
)];

/// Context is the set of team names playing in unfinished matches.
pub const NO_ACTIVE_MATCH_RULES: [Rule<str, HashSet<String>>; 1] = [Rule::with_context_derived(
    "no_active_match",
    is_not_active,
    already_playing,
)];

pub const MATCH_ID_RULES: [Rule<str>; 1] =
    [Rule::new("match_id_required", is_present, "Match ID is required")];

/// Existence and state of a match id within the collection.
pub const MATCH_STATE_RULES: [Rule<str, [Match]>; 2] = [
    Rule::with_context("match_exists", match_exists, "Match not found"),
    Rule::with_context(
        "match_not_finished",
        match_not_finished,
        "Cannot update finished match",
    ),
];

pub const SCORE_RULES: [Rule<f64>; 2] = [
    Rule::new("score_not_negative", is_not_negative, "Scores cannot be negative"),
    Rule::new("score_whole_number", is_whole_number, "Score must be a whole number"),
];

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn has_min_length(value: &str) -> bool {
    value.chars().count() >= TEAM_NAME_MIN_LEN
}

fn is_letters_and_spaces(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

fn differs_from(home: &str, away: &str) -> bool {
    home != away
}

fn is_not_active(team: &str, active_teams: &HashSet<String>) -> bool {
    !active_teams.contains(team)
}

fn already_playing(team: &str) -> String {
    format!(
        "Cannot start match: {} already have a match in progress.",
        team
    )
}

fn match_exists(match_id: &str, matches: &[Match]) -> bool {
    matches.iter().any(|game| game.id().as_str() == match_id)
}

// An unknown id is reported by `match_exists` alone.
fn match_not_finished(match_id: &str, matches: &[Match]) -> bool {
    matches
        .iter()
        .find(|game| game.id().as_str() == match_id)
        .map_or(true, |game| !game.is_finished())
}

fn is_not_negative(score: &f64) -> bool {
    *score >= 0.0
}

/// 2^64, the first whole number a stored score cannot hold.
const SCORE_CEILING: f64 = 18_446_744_073_709_551_616.0;

fn is_whole_number(score: &f64) -> bool {
    score.is_finite() && score.fract() == 0.0 && *score < SCORE_CEILING
}
