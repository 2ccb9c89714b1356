//! Ranking - Ordering of active matches for the summary view.

use std::cmp::Ordering;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::game::Match;

/// How matches with equal total score are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TieBreak {
    /// Most recently started first.
    #[default]
    MostRecentFirst,
    /// Earliest started first.
    OldestFirst,
}

/// Higher total first; equal totals ordered by start time per `tie_break`.
///
/// Matches sharing a start time keep the order they were started in, so
/// the ordering is total.
pub fn compare(a: &Match, b: &Match, tie_break: TieBreak) -> Ordering {
    let by_total = b.total_score().cmp(&a.total_score());
    let by_start = a.start_time().cmp(&b.start_time());
    let by_start = match tie_break {
        TieBreak::MostRecentFirst => by_start.reverse(),
        TieBreak::OldestFirst => by_start,
    };
    by_total
        .then(by_start)
        .then_with(|| a.sequence().cmp(&b.sequence()))
}

/// Ranked snapshot of the active matches at the time it was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    matches: Vec<Match>,
}

impl Summary {
    /// Drops finished matches and ranks the rest.
    pub fn rank<'a, I>(matches: I, tie_break: TieBreak) -> Self
    where
        I: IntoIterator<Item = &'a Match>,
    {
        let mut active: Vec<Match> = matches
            .into_iter()
            .filter(|game| game.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| compare(a, b, tie_break));
        Summary { matches: active }
    }

    /// Summary lines in rank order, e.g. `1. spain 10 - brazil 2`.
    pub fn lines(&self) -> Vec<String> {
        self.matches
            .iter()
            .enumerate()
            .map(|(rank, game)| format!("{}. {}", rank + 1, game))
            .collect()
    }
}

impl Deref for Summary {
    type Target = [Match];

    fn deref(&self) -> &[Match] {
        &self.matches
    }
}

impl IntoIterator for Summary {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
