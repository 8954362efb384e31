//! Opening-word ranking by positional letter frequency

use crate::core::{WORD_LEN, Word};

/// Score subtracted for every repeated letter in a word
pub const REPEAT_PENALTY: i64 = 10;

/// Rank `words` as opening guesses and return the best `top_n`
///
/// A word scores the sum, over its positions, of how many words in the list
/// share that letter at that position, minus [`REPEAT_PENALTY`] for each
/// letter it repeats. Higher is better; equal scores are ordered by word.
///
/// # Examples
/// ```
/// use quordle_csp::core::Word;
/// use quordle_csp::solver::rank_openers;
///
/// let words = ["slate", "crate", "grate", "eerie"].map(|w| Word::new(w).unwrap());
/// let best = rank_openers(&words, 1);
/// assert_eq!(best[0].0.text(), "crate");
/// ```
#[must_use]
pub fn rank_openers(words: &[Word], top_n: usize) -> Vec<(Word, i64)> {
    let mut frequency = [[0i64; 26]; WORD_LEN];
    for word in words {
        for (position, &ch) in word.chars().iter().enumerate() {
            frequency[position][usize::from(ch - b'a')] += 1;
        }
    }

    let mut scored: Vec<(Word, i64)> = words
        .iter()
        .map(|word| {
            let mut seen = [false; 26];
            let mut score = 0;
            for (position, &ch) in word.chars().iter().enumerate() {
                let idx = usize::from(ch - b'a');
                score += frequency[position][idx];
                if seen[idx] {
                    score -= REPEAT_PENALTY;
                }
                seen[idx] = true;
            }
            (*word, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored.truncate(top_n);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn scores_follow_positional_frequency() {
        let ranked = rank_openers(&words(&["crate", "grate", "slate"]), 3);
        // "ate" shared by all three at positions 2-4: 9 points each
        // "r" at position 1 shared by two words
        let scores: Vec<(&str, i64)> = ranked.iter().map(|(w, s)| (w.text(), *s)).collect();
        assert_eq!(scores, [("crate", 12), ("grate", 12), ("slate", 11)]);
    }

    #[test]
    fn repeated_letters_are_penalised() {
        let ranked = rank_openers(&words(&["eerie", "erase"]), 2);
        // eerie: e(2) e(1) r(1) i(1) e(2) = 7, minus 10 twice for the extra E's
        // erase: e(2) r(1) a(1) s(1) e(2) = 7, minus 10 once
        let scores: Vec<(&str, i64)> = ranked.iter().map(|(w, s)| (w.text(), *s)).collect();
        assert_eq!(scores, [("erase", -3), ("eerie", -13)]);
    }

    #[test]
    fn truncates_to_top_n() {
        let list = words(&["crane", "slate", "ghost", "plant"]);
        assert_eq!(rank_openers(&list, 2).len(), 2);
        assert_eq!(rank_openers(&list, 10).len(), 4);
        assert!(rank_openers(&[], 5).is_empty());
    }
}
