//! Word lists for puzzle sessions
//!
//! The default vocabulary is embedded at build time. A newline-delimited file
//! can replace it through [`loader::vocabulary_from_file`].

mod embedded;
pub mod loader;

use crate::core::Vocabulary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
use loader::words_from_slice;

/// Vocabulary built from the embedded guess and answer lists
///
/// # Examples
/// ```
/// use quordle_csp::wordlists::{ANSWERS_COUNT, embedded_vocabulary};
///
/// let vocabulary = embedded_vocabulary();
/// assert_eq!(vocabulary.answers().len(), ANSWERS_COUNT);
/// ```
#[must_use]
pub fn embedded_vocabulary() -> Vocabulary {
    Vocabulary::new(words_from_slice(ALLOWED), words_from_slice(ANSWERS))
}
