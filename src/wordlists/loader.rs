//! Word list loading utilities

use crate::core::{Vocabulary, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a newline-delimited file
///
/// Blank lines are ignored. Entries that are not five-letter words are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use quordle_csp::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    debug!(path = %path.display(), count = words.len(), "word list loaded");
    Ok(words)
}

/// Load a file as a vocabulary whose words are both guesses and answers
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn vocabulary_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vocabulary> {
    load_from_file(path).map(Vocabulary::from_words)
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(number, line)| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(line = number + 1, entry = line.trim(), error = %e, "skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert an embedded string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use quordle_csp::wordlists::loader::words_from_slice;
/// use quordle_csp::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
