//! Word-guessing game logic.

use tracing::instrument;

/// A single word-guessing game.
///
/// Owns one target word, fixed at creation, and answers occurrence queries
/// against it. Matching is literal character equality: no case folding and no
/// Unicode normalization, so a guess only counts where it matches the word's
/// characters exactly. The game does not remember which letters have already
/// been guessed; that bookkeeping belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: String,
}

impl Game {
    /// Creates a game for the given target word.
    ///
    /// The word must be non-empty and never changes for the lifetime of the
    /// game.
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        debug_assert!(!word.is_empty(), "target word must be non-empty");
        Self { word }
    }

    /// Counts the positions in the target word occupied by `letter`.
    #[instrument(skip(self))]
    pub fn guess(&self, letter: char) -> usize {
        self.word.chars().filter(|&c| c == letter).count()
    }

    /// The target word this game evaluates guesses against.
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_occurrence() {
        let game = Game::new("banana");
        assert_eq!(game.guess('a'), 3);
        assert_eq!(game.guess('n'), 2);
        assert_eq!(game.guess('b'), 1);
    }

    #[test]
    fn test_missing_letter_counts_zero() {
        let game = Game::new("banana");
        assert_eq!(game.guess('z'), 0);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let game = Game::new("banana");
        assert_eq!(game.guess('A'), 0);
        assert_eq!(game.guess('B'), 0);
    }

    #[test]
    fn test_word_is_exposed_unchanged() {
        let game = Game::new("snowman");
        assert_eq!(game.word(), "snowman");
    }
}
