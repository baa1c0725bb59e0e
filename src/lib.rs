//! Melting Snowman - a server-side word-guessing game.
//!
//! Clients create a game session, submit single-letter guesses, and receive
//! the number of positions the guessed letter occupies in the target word,
//! along with a running guess count.
//!
//! # Architecture
//!
//! - **Game**: one immutable target word plus occurrence queries against it
//! - **Registry**: concurrent session storage with monotonic ID allocation
//! - **Words**: pluggable source of target words for new games
//! - **Api**: axum REST layer over the registry
//!
//! # Example
//!
//! ```
//! use melting_snowman::{FixedWord, SessionRegistry};
//! use std::sync::Arc;
//!
//! let registry = SessionRegistry::with_words(Arc::new(FixedWord::new("banana")));
//! let id = registry.create_session()?;
//!
//! let outcome = registry.apply_guess(id, "a")?;
//! assert_eq!(outcome.occurrences, 3);
//! assert_eq!(outcome.guess_count, 1);
//! # Ok::<(), melting_snowman::RegistryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod registry;
mod words;

// Transport layer
pub mod api;

// Crate-level exports - API state
pub use api::ApiState;

// Crate-level exports - Error types
pub use error::RegistryError;

// Crate-level exports - Game logic
pub use game::Game;

// Crate-level exports - Session registry
pub use registry::{GuessOutcome, SessionId, SessionRegistry, SessionStatus};

// Crate-level exports - Word selection
pub use words::{BuiltinWords, FixedWord, WordSource};
