//! Word selection for new games.

use rand::seq::IndexedRandom;

/// Built-in word list, all lowercase ASCII.
const WORDS: &[&str] = &[
    "snowman",
    "blizzard",
    "icicle",
    "frostbite",
    "avalanche",
    "carrot",
    "mitten",
    "glacier",
    "snowflake",
    "shovel",
    "sleigh",
    "thaw",
    "winter",
    "banana",
];

/// Source of target words for new games.
///
/// Invoked once per session creation. Implementations must return a non-empty
/// word on every call; the selection strategy (fixed list, random generator,
/// external dictionary) is up to the implementation.
pub trait WordSource: Send + Sync {
    /// Chooses the target word for a freshly created game.
    fn choose_word(&self) -> String;
}

/// Picks a word uniformly at random from the built-in list.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn choose_word(&self) -> String {
        let word = WORDS
            .choose(&mut rand::rng())
            .expect("built-in word list is non-empty");
        (*word).to_string()
    }
}

/// Always returns the same word. Useful for deterministic tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWord(String);

impl FixedWord {
    /// Creates a source that always yields `word`.
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }
}

impl WordSource for FixedWord {
    fn choose_word(&self) -> String {
        self.0.clone()
    }
}
