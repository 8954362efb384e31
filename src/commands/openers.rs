//! Openers command
//!
//! Ranks candidate opening words over the answer list.

use crate::core::{Vocabulary, Word};
use crate::solver::rank_openers;

/// Best `top_n` opening words scored against the vocabulary's answers
#[must_use]
pub fn best_openers(vocabulary: &Vocabulary, top_n: usize) -> Vec<(Word, i64)> {
    rank_openers(vocabulary.answers(), top_n)
}
