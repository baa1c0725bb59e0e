//! Concurrent session registry.
//!
//! Tracks every active game session in a sharded map keyed by session ID.
//! Operations on distinct sessions proceed without contention; mutation of a
//! single session is serialized by its map shard, so guess counts are never
//! lost or duplicated under concurrent access.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::{debug, error, info, instrument};

use crate::error::RegistryError;
use crate::game::Game;
use crate::words::{BuiltinWords, WordSource};

/// Unique identifier for a game session.
pub type SessionId = u64;

/// One registered session: the game plus its guess bookkeeping.
#[derive(Debug)]
struct SessionEntry {
    game: Game,
    guess_count: u64,
}

/// Read-only snapshot of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    /// The session's target word.
    pub word: String,
    /// Number of accepted guesses so far.
    pub guess_count: u64,
}

/// Result of one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Positions in the target word matching the guessed letter.
    pub occurrences: usize,
    /// The session's target word.
    pub word: String,
    /// Guess count after this guess was applied.
    pub guess_count: u64,
}

/// Thread-safe registry of word-guessing sessions.
///
/// Session IDs come from a monotonic process-wide counter starting at 1 and
/// are never reused. Sessions live for the process lifetime; there is no
/// eviction or persistence. The registry is meant to be constructed once at
/// startup and shared behind an [`Arc`], with tests building their own fresh
/// instance.
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionEntry>,
    next_id: AtomicU64,
    words: Arc<dyn WordSource>,
}

impl SessionRegistry {
    /// Creates a registry that draws target words from the built-in list.
    pub fn new() -> Self {
        Self::with_words(Arc::new(BuiltinWords))
    }

    /// Creates a registry with a custom word source.
    pub fn with_words(words: Arc<dyn WordSource>) -> Self {
        Self {
            sessions: DashMap::new(),
            next_id: AtomicU64::new(1),
            words,
        }
    }

    /// Creates a new session and returns its ID.
    ///
    /// IDs are handed out in strictly increasing order starting at 1; two
    /// concurrent calls never receive the same ID. The new session starts
    /// with a freshly chosen target word and a guess count of 0.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Registration`] if the freshly allocated ID is
    /// already present in the registry. This cannot happen while the counter
    /// is intact and is treated as a server-side fault.
    #[instrument(skip(self))]
    pub fn create_session(&self) -> Result<SessionId, RegistryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entry = SessionEntry {
            game: Game::new(self.words.choose_word()),
            guess_count: 0,
        };

        if self.sessions.insert(id, entry).is_some() {
            error!(session_id = id, "allocated session ID was already registered");
            return Err(RegistryError::Registration { id });
        }

        info!(session_id = id, "session created");
        Ok(id)
    }

    /// Returns the current status of a session.
    ///
    /// Read-only; the word is returned raw, exactly as chosen at creation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no session has this ID.
    #[instrument(skip(self))]
    pub fn status(&self, id: SessionId) -> Result<SessionStatus, RegistryError> {
        let entry = self
            .sessions
            .get(&id)
            .ok_or(RegistryError::NotFound { id })?;

        Ok(SessionStatus {
            word: entry.game.word().to_string(),
            guess_count: entry.guess_count,
        })
    }

    /// Applies a letter guess to a session.
    ///
    /// `letter` must be exactly one character. A format-valid guess
    /// increments the session's guess count by exactly 1 before the word is
    /// queried; the entry stays exclusively locked for the duration of the
    /// update, so N concurrent guesses on one session advance the count by
    /// exactly N and each caller reads back its own increment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidLetter`] if `letter` is empty or
    /// longer than one character, and [`RegistryError::NotFound`] if no
    /// session has this ID. Neither failure mutates any state.
    #[instrument(skip(self))]
    pub fn apply_guess(&self, id: SessionId, letter: &str) -> Result<GuessOutcome, RegistryError> {
        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(RegistryError::InvalidLetter),
        };

        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(RegistryError::NotFound { id })?;

        entry.guess_count += 1;
        let occurrences = entry.game.guess(letter);

        debug!(
            session_id = id,
            occurrences,
            guess_count = entry.guess_count,
            "guess applied"
        );

        Ok(GuessOutcome {
            occurrences,
            word: entry.game.word().to_string(),
            guess_count: entry.guess_count,
        })
    }

    /// Number of registered sessions.
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
