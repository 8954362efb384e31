//! Core domain types for Quordle
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod vocabulary;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use vocabulary::{GuessError, Vocabulary};
pub use word::{WORD_LEN, Word, WordError};

/// Number of simultaneous boards (target words) in a Quordle puzzle
pub const BOARDS: usize = 4;
