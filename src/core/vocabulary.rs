//! The fixed word vocabulary of a puzzle session
//!
//! Holds the valid guess words and the eligible target words. Built once and
//! shared read-only by every solver and game that uses it.

use super::word::{Word, WordError};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Reason a guess was rejected before reaching the solver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("'{0}' is not in the word list")]
    NotInWordList(Word),
}

/// Immutable set of guessable words and candidate target words
#[derive(Debug, Clone)]
pub struct Vocabulary {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from a guess list and an answer list
    ///
    /// Duplicates are dropped (first occurrence wins) and every answer is also
    /// made a valid guess.
    #[must_use]
    pub fn new(
        guesses: impl IntoIterator<Item = Word>,
        answers: impl IntoIterator<Item = Word>,
    ) -> Self {
        let answers = dedup(answers);
        let mut lookup = FxHashSet::default();
        let mut all = Vec::new();
        for word in guesses.into_iter().chain(answers.iter().copied()) {
            if lookup.insert(word) {
                all.push(word);
            }
        }

        Self {
            guesses: all,
            answers,
            lookup,
        }
    }

    /// Vocabulary where every word is both a guess and a possible answer
    ///
    /// # Examples
    /// ```
    /// use quordle_csp::core::{Vocabulary, Word};
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let vocab = Vocabulary::from_words(words);
    /// assert_eq!(vocab.answers().len(), 2);
    /// assert!(vocab.contains(&Word::new("slate").unwrap()));
    /// ```
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let words = dedup(words);
        Self::new(words.clone(), words)
    }

    /// All valid guess words (answers included)
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Words eligible to be a hidden target
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// True if `word` may be guessed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    /// Validate raw user input as a guess
    ///
    /// # Errors
    /// Returns `GuessError::Malformed` for text that is not a five-letter word
    /// and `GuessError::NotInWordList` for a well-formed word outside the
    /// vocabulary.
    pub fn validate_guess(&self, text: &str) -> Result<Word, GuessError> {
        let word = Word::new(text)?;
        if self.contains(&word) {
            Ok(word)
        } else {
            Err(GuessError::NotInWordList(word))
        }
    }
}

fn dedup(words: impl IntoIterator<Item = Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words.into_iter().filter(|w| seen.insert(*w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn answers_are_always_guessable() {
        let vocab = Vocabulary::new(words(&["salet", "crane"]), words(&["crane", "ghost"]));
        assert_eq!(vocab.guesses().len(), 3);
        assert_eq!(vocab.answers().len(), 2);
        assert!(vocab.contains(&Word::new("ghost").unwrap()));
    }

    #[test]
    fn duplicates_are_removed_in_order() {
        let vocab = Vocabulary::from_words(words(&["slate", "crane", "slate", "irate"]));
        let texts: Vec<&str> = vocab.answers().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
    }

    #[test]
    fn validate_guess_accepts_known_word() {
        let vocab = Vocabulary::from_words(words(&["crane"]));
        assert_eq!(
            vocab.validate_guess("CRANE"),
            Ok(Word::new("crane").unwrap())
        );
    }

    #[test]
    fn validate_guess_rejects_bad_input() {
        let vocab = Vocabulary::from_words(words(&["crane"]));
        assert_eq!(
            vocab.validate_guess("cran"),
            Err(GuessError::Malformed(WordError::InvalidLength(4)))
        );
        assert_eq!(
            vocab.validate_guess("slate"),
            Err(GuessError::NotInWordList(Word::new("slate").unwrap()))
        );
    }
}
