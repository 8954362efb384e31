//! Candidate-word domain of a single board

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The set of words still possible for one board
///
/// Domains only ever shrink: the only mutators remove words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    words: FxHashSet<Word>,
}

impl Domain {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        words.into_iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.words.iter()
    }

    /// Words in alphabetical order, for reproducible traversal
    #[must_use]
    pub fn sorted(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn singleton(&self) -> Option<Word> {
        if self.words.len() == 1 {
            self.words.iter().next().copied()
        } else {
            None
        }
    }

    /// Keep only words matching `keep`; returns how many were removed
    pub fn retain(&mut self, mut keep: impl FnMut(&Word) -> bool) -> usize {
        let before = self.words.len();
        self.words.retain(|w| keep(w));
        before - self.words.len()
    }
}

impl FromIterator<Word> for Domain {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(list: &[&str]) -> Domain {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn singleton_only_for_one_word() {
        assert_eq!(domain(&[]).singleton(), None);
        assert_eq!(
            domain(&["crane"]).singleton(),
            Some(Word::new("crane").unwrap())
        );
        assert_eq!(domain(&["crane", "slate"]).singleton(), None);
    }

    #[test]
    fn retain_reports_removed_count() {
        let mut d = domain(&["crane", "crate", "slate"]);
        let removed = d.retain(|w| w.char_at(0) == b'c');
        assert_eq!(removed, 1);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn sorted_is_alphabetical() {
        let d = domain(&["slate", "crane", "irate"]);
        let texts: Vec<String> = d.sorted().iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }
}
