//! Match notifications for in-process listeners.
//!
//! Notifications are queued while a mutation is being applied and emitted
//! only after the scoreboard has committed the new collection, so a rejected
//! operation never reaches a listener.
//!
//! ```ignore
//! let mut board = Scoreboard::new();
//! board.on(MatchEvent::Started, |payload: String| {
//!     println!("started: {}", payload);
//! });
//! board.start("Mexico", "Canada")?;
//! ```

use std::fmt;

use event_emitter_rs::EventEmitter;

use crate::scoreboard::Match;

/// Transitions a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchEvent {
    Started,
    ScoreUpdated,
    Finished,
}

impl MatchEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchEvent::Started => "MatchStarted",
            MatchEvent::ScoreUpdated => "ScoreUpdated",
            MatchEvent::Finished => "MatchFinished",
        }
    }
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct QueuedEvent {
    event: MatchEvent,
    payload: String,
}

/// Listener registry plus the notifications waiting for a commit.
pub struct MatchEvents {
    emitter: EventEmitter,
    queued: Vec<QueuedEvent>,
}

impl Default for MatchEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEvents {
    pub fn new() -> Self {
        MatchEvents {
            emitter: EventEmitter::new(),
            queued: Vec::new(),
        }
    }

    /// Register a listener; it receives the affected match as JSON.
    /// Returns an id usable with [`MatchEvents::remove_listener`].
    pub fn on<F>(&mut self, event: MatchEvent, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event.as_str(), listener)
    }

    pub fn remove_listener(&mut self, id: &str) -> bool {
        self.emitter.remove_listener(id).is_some()
    }

    /// Queue a notification for the next [`MatchEvents::emit_queued`].
    pub fn enqueue(&mut self, event: MatchEvent, game: &Match) {
        match serde_json::to_string(game) {
            Ok(payload) => self.queued.push(QueuedEvent { event, payload }),
            Err(err) => {
                tracing::warn!(event = event.as_str(), match_id = %game.id(), error = %err, "dropping match notification");
            }
        }
    }

    /// Emit every queued notification and wait for the listeners to run.
    pub fn emit_queued(&mut self) {
        let queued: Vec<_> = self.queued.drain(..).collect();
        for QueuedEvent { event, payload } in queued {
            for handle in self.emitter.emit(event.as_str(), payload) {
                if handle.join().is_err() {
                    tracing::warn!(event = event.as_str(), "match listener panicked");
                }
            }
        }
    }

    /// Notifications waiting for the next commit.
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }
}

impl fmt::Debug for MatchEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEvents")
            .field("queued", &self.queued.len())
            .finish()
    }
}
