//! Solver error taxonomy

use crate::core::{GuessError, Word};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The guess is malformed or outside the vocabulary; nothing was changed
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),

    /// The four feedback entries describe different guesses; nothing was changed
    #[error("feedback entries disagree on the guess: expected '{expected}', found '{found}'")]
    MismatchedGuess { expected: Word, found: Word },

    /// Feedback pruned one or more boards to an empty domain
    ///
    /// The pruning is kept; the solver falls back to its empty-domain path.
    #[error("feedback is contradictory: no candidates left for board(s) {boards:?}")]
    ContradictoryFeedback { boards: Vec<usize> },

    /// Every vocabulary word has already been guessed
    #[error("vocabulary exhausted: no unused word remains to guess")]
    VocabularyExhausted,
}
