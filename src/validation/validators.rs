use std::collections::HashSet;

use super::rules::{
    DIFFERENT_TEAMS_RULES, MATCH_ID_RULES, MATCH_STATE_RULES, NO_ACTIVE_MATCH_RULES, SCORE_RULES,
    TEAM_NAME_RULES,
};
use super::{validate, validate_with_context, ValidationResult};
use crate::scoreboard::Match;

/// Checks a proposed pairing against the teams already playing.
///
/// Team names are expected to be normalized by the caller. Order of the
/// reported messages: home name shape, away name shape, different teams,
/// home availability, away availability.
pub fn validate_start_match<'a, I>(
    home_team: &str,
    away_team: &str,
    active_pairs: I,
) -> ValidationResult
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let active_teams: HashSet<String> = active_pairs
        .into_iter()
        .flat_map(|(home, away)| [home.to_string(), away.to_string()])
        .collect();

    ValidationResult::combine([
        validate(home_team, &TEAM_NAME_RULES),
        validate(away_team, &TEAM_NAME_RULES),
        validate_with_context(home_team, away_team, &DIFFERENT_TEAMS_RULES),
        validate_with_context(home_team, &active_teams, &NO_ACTIVE_MATCH_RULES),
        validate_with_context(away_team, &active_teams, &NO_ACTIVE_MATCH_RULES),
    ])
}

/// Id must be present, known, and refer to an unfinished match.
pub fn validate_match_id(match_id: &str, matches: &[Match]) -> ValidationResult {
    ValidationResult::combine([
        validate(match_id, &MATCH_ID_RULES),
        validate_with_context(match_id, matches, &MATCH_STATE_RULES),
    ])
}

pub fn validate_score(score: f64) -> ValidationResult {
    validate(&score, &SCORE_RULES)
}

pub fn validate_update_score(
    match_id: &str,
    home_score: f64,
    away_score: f64,
    matches: &[Match],
) -> ValidationResult {
    ValidationResult::combine([
        validate_match_id(match_id, matches),
        validate_score(home_score),
        validate_score(away_score),
    ])
}

pub fn validate_finish_match(match_id: &str, matches: &[Match]) -> ValidationResult {
    validate_match_id(match_id, matches)
}
