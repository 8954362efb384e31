//! Per-letter guess feedback and its evaluation
//!
//! A `Feedback` pairs each letter of a guess with a `Mark`:
//! - Grey: the letter is not in the target (beyond occurrences already matched)
//! - Yellow: the letter is in the target, but not at this position
//! - Green: the letter is at this position in the target
//!
//! Feedback is immutable once produced.

use super::word::{WORD_LEN, Word};
use thiserror::Error;

/// Colour assigned to a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Grey,
    Yellow,
    Green,
}

impl Mark {
    /// Base-3 digit used by [`Feedback::code`]
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    /// Emoji tile for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Grey => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Grey),
            _ => None,
        }
    }
}

/// Error raised when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

/// Feedback for one guess evaluated against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    guess: Word,
    marks: [Mark; WORD_LEN],
}

impl Feedback {
    /// Code of an all-green feedback: 2 + 2×3 + 2×9 + 2×27 + 2×81
    pub const SOLVED_CODE: u8 = 242;

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn new(guess: Word, marks: [Mark; WORD_LEN]) -> Self {
        Self { guess, marks }
    }

    /// Evaluate `guess` against `target`
    ///
    /// Implements the standard duplicate-letter rules.
    ///
    /// # Algorithm
    /// 1. Count the letters of the target
    /// 2. First pass: mark greens and remove them from the pool
    /// 3. Second pass: mark yellows from what is left of the pool, grey otherwise
    ///
    /// # Examples
    /// ```
    /// use quordle_csp::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// // S(yellow) P(grey) E(yellow) E(yellow) D(grey)
    /// assert_eq!(feedback.to_emoji(), "🟨⬜🟨🟨⬜");
    /// assert_eq!(feedback.count(Mark::Yellow), 3);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Grey; WORD_LEN];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                marks[i] = Mark::Green;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Green {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                marks[i] = Mark::Yellow;
                *slot -= 1;
            }
        }

        Self {
            guess: *guess,
            marks,
        }
    }

    /// Parse feedback for `guess` from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string does not contain exactly five
    /// recognised symbols.
    ///
    /// # Examples
    /// ```
    /// use quordle_csp::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let a = Feedback::parse(guess, "GY-GY").unwrap();
    /// let b = Feedback::parse(guess, "🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(guess: Word, s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Grey; WORD_LEN];
        for (mark, &ch) in marks.iter_mut().zip(&symbols) {
            *mark = Mark::from_symbol(ch).ok_or(FeedbackError::InvalidSymbol(ch))?;
        }

        Ok(Self { guess, marks })
    }

    /// The guessed word this feedback describes
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Word {
        self.guess
    }

    /// Marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.marks
    }

    /// `(letter, mark)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.guess.chars().iter().copied().zip(self.marks)
    }

    /// True when every letter is green
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Green)
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Compact base-3 encoding of the marks (0-242)
    #[must_use]
    pub fn code(&self) -> u8 {
        self.marks
            .iter()
            .rev()
            .fold(0u8, |acc, mark| acc * 3 + mark.digit())
    }

    /// Emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}
