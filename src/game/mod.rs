//! Four-board game state
//!
//! Holds the hidden targets, the attempt budget and per-board progress. This is
//! the referee side of a puzzle: it owns the true targets and produces the
//! feedback that a solver consumes.

use crate::core::{BOARDS, Feedback, GuessError, Vocabulary, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::debug;

/// Default attempt budget of a Quordle game
pub const DEFAULT_MAX_ATTEMPTS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),
    #[error("the game is over")]
    GameOver,
    #[error("target '{0}' is not in the word list")]
    InvalidTarget(Word),
    #[error("target '{0}' appears more than once")]
    DuplicateTarget(Word),
    #[error("need at least {BOARDS} answer words, vocabulary has {0}")]
    NotEnoughAnswers(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One submitted guess and its feedback on every board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: [Feedback; BOARDS],
    /// Boards this guess solved
    pub newly_solved: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Game<'a> {
    vocabulary: &'a Vocabulary,
    targets: [Word; BOARDS],
    config: GameConfig,
    turns: Vec<Turn>,
    solved_at: [Option<usize>; BOARDS],
}

impl<'a> Game<'a> {
    /// Start a game with known targets
    ///
    /// # Errors
    /// Returns `GameError::InvalidTarget` for a target outside the vocabulary
    /// and `GameError::DuplicateTarget` if two boards share a target.
    pub fn new(
        vocabulary: &'a Vocabulary,
        targets: [Word; BOARDS],
        config: GameConfig,
    ) -> Result<Self, GameError> {
        for (i, target) in targets.iter().enumerate() {
            if !vocabulary.contains(target) {
                return Err(GameError::InvalidTarget(*target));
            }
            if targets[..i].contains(target) {
                return Err(GameError::DuplicateTarget(*target));
            }
        }

        Ok(Self {
            vocabulary,
            targets,
            config,
            turns: Vec::new(),
            solved_at: [None; BOARDS],
        })
    }

    /// Start a game with four distinct targets drawn from the answer list
    ///
    /// # Errors
    /// Returns `GameError::NotEnoughAnswers` if fewer than four answers exist.
    pub fn new_random<R: Rng + ?Sized>(
        vocabulary: &'a Vocabulary,
        rng: &mut R,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        let answers = vocabulary.answers();
        let picked: Vec<Word> = answers.choose_multiple(rng, BOARDS).copied().collect();
        let targets: [Word; BOARDS] = picked
            .try_into()
            .map_err(|_| GameError::NotEnoughAnswers(answers.len()))?;
        debug!(?targets, "random targets chosen");
        Self::new(vocabulary, targets, config)
    }

    /// Validate and submit a typed guess
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or out of attempts
    /// - `GameError::InvalidGuess` for malformed or unknown words; no attempt
    ///   is consumed
    pub fn submit(&mut self, text: &str) -> Result<&Turn, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        let guess = self.vocabulary.validate_guess(text)?;
        Ok(self.apply(guess))
    }

    /// Submit an already validated word
    ///
    /// # Errors
    /// Same as [`Game::submit`].
    pub fn submit_word(&mut self, guess: Word) -> Result<&Turn, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.vocabulary.contains(&guess) {
            return Err(GuessError::NotInWordList(guess).into());
        }
        Ok(self.apply(guess))
    }

    fn apply(&mut self, guess: Word) -> &Turn {
        let turn_number = self.turns.len() + 1;
        let feedback = self.targets.map(|target| Feedback::evaluate(&guess, &target));

        let mut newly_solved = Vec::new();
        for (board, target) in self.targets.iter().enumerate() {
            if self.solved_at[board].is_none() && *target == guess {
                self.solved_at[board] = Some(turn_number);
                newly_solved.push(board);
            }
        }
        debug!(%guess, turn = turn_number, ?newly_solved, "guess submitted");

        self.turns.push(Turn {
            guess,
            feedback,
            newly_solved,
        });
        &self.turns[self.turns.len() - 1]
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.solved_at.iter().all(Option::is_some) {
            GameStatus::Won
        } else if self.turns.len() >= self.config.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.turns.len())
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_solved(&self, board: usize) -> bool {
        self.solved_at[board].is_some()
    }

    /// Turn number (1-based) on which `board` was solved
    #[must_use]
    pub const fn solved_at(&self, board: usize) -> Option<usize> {
        self.solved_at[board]
    }

    /// The hidden targets
    #[must_use]
    pub const fn targets(&self) -> &[Word; BOARDS] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(
            ["crane", "ghost", "speed", "plant", "slate", "erase"].map(w),
        )
    }

    fn game(vocabulary: &Vocabulary, max_attempts: usize) -> Game<'_> {
        Game::new(
            vocabulary,
            ["crane", "ghost", "speed", "plant"].map(w),
            GameConfig { max_attempts },
        )
        .unwrap()
    }

    #[test]
    fn submit_evaluates_every_board() {
        let vocabulary = vocab();
        let mut game = game(&vocabulary, 9);
        let turn = game.submit("SLATE").unwrap();

        assert_eq!(turn.guess, w("slate"));
        assert_eq!(turn.feedback[0].count(Mark::Green), 2);
        assert!(turn.newly_solved.is_empty());
        assert_eq!(game.attempts_used(), 1);
        assert_eq!(game.attempts_left(), 8);
    }

    #[test]
    fn solving_all_boards_wins() {
        let vocabulary = vocab();
        let mut game = game(&vocabulary, 9);
        for (i, guess) in ["crane", "ghost", "speed", "plant"].iter().enumerate() {
            let turn = game.submit(guess).unwrap();
            assert_eq!(turn.newly_solved, vec![i]);
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.solved_at(2), Some(3));
        assert_eq!(game.submit("slate").unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let vocabulary = vocab();
        let mut game = game(&vocabulary, 2);
        game.submit("crane").unwrap();
        game.submit("slate").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_solved(0));
        assert!(!game.is_solved(1));
    }

    #[test]
    fn invalid_guess_consumes_no_attempt() {
        let vocabulary = vocab();
        let mut game = game(&vocabulary, 9);
        assert!(matches!(
            game.submit("cran"),
            Err(GameError::InvalidGuess(GuessError::Malformed(_)))
        ));
        assert!(matches!(
            game.submit("house"),
            Err(GameError::InvalidGuess(GuessError::NotInWordList(_)))
        ));
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn targets_must_be_known_and_distinct() {
        let vocabulary = vocab();
        assert_eq!(
            Game::new(
                &vocabulary,
                ["crane", "crane", "speed", "plant"].map(w),
                GameConfig::default()
            )
            .unwrap_err(),
            GameError::DuplicateTarget(w("crane"))
        );
        assert_eq!(
            Game::new(
                &vocabulary,
                ["house", "ghost", "speed", "plant"].map(w),
                GameConfig::default()
            )
            .unwrap_err(),
            GameError::InvalidTarget(w("house"))
        );
    }

    #[test]
    fn random_targets_are_distinct_answers() {
        let vocabulary = vocab();
        let mut rng = StdRng::seed_from_u64(9);
        let game = Game::new_random(&vocabulary, &mut rng, GameConfig::default()).unwrap();
        let targets = game.targets();
        for (i, target) in targets.iter().enumerate() {
            assert!(vocabulary.answers().contains(target));
            assert!(!targets[..i].contains(target));
        }
    }

    #[test]
    fn random_game_needs_four_answers() {
        let vocabulary = Vocabulary::from_words(["crane", "ghost"].map(w));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Game::new_random(&vocabulary, &mut rng, GameConfig::default()).unwrap_err(),
            GameError::NotEnoughAnswers(2)
        );
    }
}
