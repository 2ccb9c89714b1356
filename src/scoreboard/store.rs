use std::fmt;

use super::clock::{Clock, SystemClock};
use super::command::{Command, CommandOutcome};
use super::config::ScoreboardConfig;
use super::game::{normalize_team_name, Match, MatchId};
use super::ranking::Summary;
use crate::error::ValidationError;
use crate::validation::{
    validate_finish_match, validate_start_match, validate_update_score, ValidationResult,
};

#[cfg(feature = "emitter")]
use crate::emitter::{MatchEvent, MatchEvents};

/// Owner of the match collection.
///
/// Every mutation runs its validator against the current collection first.
/// A rejected call returns every violated rule message and leaves the
/// collection exactly as it was; an accepted call replaces the collection
/// with a rebuilt one.
///
/// Finished matches stay in the collection (readable through
/// [`Scoreboard::get`]) but never appear in [`Scoreboard::matches`] again.
pub struct Scoreboard<C = SystemClock> {
    matches: Vec<Match>,
    config: ScoreboardConfig,
    clock: C,
    next_sequence: u64,
    #[cfg(feature = "emitter")]
    events: MatchEvents,
}

impl Default for Scoreboard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard<SystemClock> {
    /// Empty scoreboard on the system clock with default settings.
    pub fn new() -> Self {
        Self::with_config(ScoreboardConfig::default())
    }

    /// Empty scoreboard on the system clock.
    pub fn with_config(config: ScoreboardConfig) -> Self {
        Scoreboard {
            matches: Vec::new(),
            config,
            clock: SystemClock,
            next_sequence: 1,
            #[cfg(feature = "emitter")]
            events: MatchEvents::new(),
        }
    }
}

impl<C: Clock> Scoreboard<C> {
    /// Swap the source of start times.
    pub fn with_clock<K: Clock>(self, clock: K) -> Scoreboard<K> {
        Scoreboard {
            matches: self.matches,
            config: self.config,
            clock,
            next_sequence: self.next_sequence,
            #[cfg(feature = "emitter")]
            events: self.events,
        }
    }

    /// Settings the summary is ranked with.
    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start a match between two teams and return its id.
    ///
    /// Names are trimmed and lower-cased before validation.
    pub fn start(&mut self, home_team: &str, away_team: &str) -> Result<MatchId, ValidationError> {
        let home_team = normalize_team_name(home_team);
        let away_team = normalize_team_name(away_team);

        let active_pairs = self
            .matches
            .iter()
            .filter(|game| game.is_active())
            .map(|game| (game.home_team(), game.away_team()));
        let result = validate_start_match(&home_team, &away_team, active_pairs);
        reject_if_invalid("start", result)?;

        let game = Match::start(home_team, away_team, self.clock.now(), self.next_sequence);
        self.next_sequence += 1;
        let id = game.id().clone();

        tracing::debug!(
            match_id = %id,
            home_team = game.home_team(),
            away_team = game.away_team(),
            "match started"
        );

        #[cfg(feature = "emitter")]
        self.events.enqueue(MatchEvent::Started, &game);

        let mut matches = Vec::with_capacity(self.matches.len() + 1);
        matches.extend(self.matches.iter().cloned());
        matches.push(game);
        self.commit(matches);

        Ok(id)
    }

    /// Replace the score of an active match. Negative, fractional and
    /// unstorably large scores are rejected.
    pub fn update_score(
        &mut self,
        match_id: impl AsRef<str>,
        home_score: impl Into<f64>,
        away_score: impl Into<f64>,
    ) -> Result<(), ValidationError> {
        let match_id = match_id.as_ref();
        let home_score = home_score.into();
        let away_score = away_score.into();

        let result = validate_update_score(match_id, home_score, away_score, &self.matches);
        reject_if_invalid("update_score", result)?;

        let (home_score, away_score) = (home_score as u64, away_score as u64);
        let matches = self.rebuild(match_id, |game| game.with_scores(home_score, away_score));

        tracing::debug!(match_id, home_score, away_score, "score updated");
        self.commit(matches);
        Ok(())
    }

    /// Mark an active match finished. It leaves the summary for good.
    pub fn finish(&mut self, match_id: impl AsRef<str>) -> Result<(), ValidationError> {
        let match_id = match_id.as_ref();

        let result = validate_finish_match(match_id, &self.matches);
        reject_if_invalid("finish", result)?;

        let matches = self.rebuild(match_id, Match::finished);

        tracing::debug!(match_id, "match finished");
        self.commit(matches);
        Ok(())
    }

    /// Route a deserialized request to the matching operation.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, ValidationError> {
        tracing::trace!(command = command.name(), "executing command");
        match command {
            Command::StartMatch(request) => self
                .start(&request.home_team, &request.away_team)
                .map(CommandOutcome::Started),
            Command::UpdateScore(request) => self
                .update_score(&request.match_id, request.home_score, request.away_score)
                .map(|()| CommandOutcome::Applied),
            Command::FinishMatch(request) => self
                .finish(&request.match_id)
                .map(|()| CommandOutcome::Applied),
        }
    }

    /// Active matches, highest total first, ranked fresh on every call.
    pub fn matches(&self) -> Summary {
        Summary::rank(&self.matches, self.config.tie_break)
    }

    /// Any match ever started here, finished or not.
    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|game| game.id().as_str() == match_id)
    }

    /// Finished matches, in start order.
    pub fn finished(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|game| game.is_finished())
    }

    /// Number of matches the summary would list.
    pub fn active_count(&self) -> usize {
        self.matches.iter().filter(|game| game.is_active()).count()
    }

    /// Number of matches held, finished ones included.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Register a listener for one kind of transition.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: MatchEvent, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.events.on(event, listener)
    }

    /// Unregister a listener by the id [`Scoreboard::on`] returned.
    /// Returns `false` if no such listener exists.
    #[cfg(feature = "emitter")]
    pub fn remove_listener(&mut self, id: &str) -> bool {
        self.events.remove_listener(id)
    }

    /// New collection with the target match swapped for `apply(target)`.
    fn rebuild<F>(&mut self, match_id: &str, apply: F) -> Vec<Match>
    where
        F: Fn(&Match) -> Match,
    {
        self.matches
            .iter()
            .map(|game| {
                if game.id().as_str() != match_id {
                    return game.clone();
                }
                let updated = apply(game);
                #[cfg(feature = "emitter")]
                self.events.enqueue(transition(game, &updated), &updated);
                updated
            })
            .collect()
    }

    fn commit(&mut self, matches: Vec<Match>) {
        self.matches = matches;
        #[cfg(feature = "emitter")]
        self.events.emit_queued();
    }
}

#[cfg(feature = "emitter")]
fn transition(before: &Match, after: &Match) -> MatchEvent {
    if !before.is_finished() && after.is_finished() {
        MatchEvent::Finished
    } else {
        MatchEvent::ScoreUpdated
    }
}

fn reject_if_invalid(operation: &'static str, result: ValidationResult) -> Result<(), ValidationError> {
    result.into_result().map_err(|err| {
        tracing::debug!(operation, errors = err.errors().len(), reason = %err, "operation rejected");
        err
    })
}

impl<C: fmt::Debug> fmt::Debug for Scoreboard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoreboard")
            .field("matches", &self.matches)
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("next_sequence", &self.next_sequence)
            .finish()
    }
}
