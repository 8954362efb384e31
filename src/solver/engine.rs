//! Main Quordle constraint solver

use super::config::{SingletonPolicy, SolverConfig};
use super::consistency::{arc_consistency, node_consistency};
use super::domain::Domain;
use super::error::SolverError;
use super::search::{SearchOutcome, backtracking_search};
use crate::core::{BOARDS, Feedback, GuessError, Vocabulary, Word};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

/// Constraint solver for one four-board puzzle session
///
/// Owns one candidate domain per board plus the feedback history that
/// produced it. Each session gets its own solver; nothing is shared between
/// solvers except the read-only vocabulary.
#[derive(Debug)]
pub struct Solver<'a, R = StdRng> {
    vocabulary: &'a Vocabulary,
    config: SolverConfig,
    domains: [Domain; BOARDS],
    history: [Vec<Feedback>; BOARDS],
    solved: [bool; BOARDS],
    used: FxHashSet<Word>,
    rng: R,
}

impl<'a> Solver<'a, StdRng> {
    /// Create a solver with default configuration seeded from the OS
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self::with_rng(vocabulary, SolverConfig::default(), StdRng::from_os_rng())
    }

    /// Create a solver whose tie-breaks are reproducible from `seed`
    #[must_use]
    pub fn seeded(vocabulary: &'a Vocabulary, config: SolverConfig, seed: u64) -> Self {
        Self::with_rng(vocabulary, config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> Solver<'a, R> {
    /// Create a solver with an explicit configuration and random source
    ///
    /// Every domain starts as the full answer list.
    pub fn with_rng(vocabulary: &'a Vocabulary, config: SolverConfig, rng: R) -> Self {
        Self {
            vocabulary,
            config,
            domains: std::array::from_fn(|_| Domain::new(vocabulary.answers().iter().copied())),
            history: Default::default(),
            solved: [false; BOARDS],
            used: FxHashSet::default(),
            rng,
        }
    }

    /// Restore the initial state: full domains, no history, no used guesses
    pub fn reset(&mut self) {
        let answers = self.vocabulary.answers();
        for domain in &mut self.domains {
            *domain = Domain::new(answers.iter().copied());
        }
        self.history = Default::default();
        self.solved = [false; BOARDS];
        self.used.clear();
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Current candidate domain of `board`
    ///
    /// # Panics
    /// Panics if `board >= 4`
    #[must_use]
    pub fn domain(&self, board: usize) -> &Domain {
        &self.domains[board]
    }

    /// Number of candidates left on each board
    #[must_use]
    pub fn domain_sizes(&self) -> [usize; BOARDS] {
        std::array::from_fn(|i| self.domains[i].len())
    }

    /// Feedback recorded for `board`, in guess order
    #[must_use]
    pub fn history(&self, board: usize) -> &[Feedback] {
        &self.history[board]
    }

    /// Words already guessed this session
    #[must_use]
    pub const fn used_guesses(&self) -> &FxHashSet<Word> {
        &self.used
    }

    /// True once an all-green feedback has been recorded for `board`
    #[must_use]
    pub const fn is_solved(&self, board: usize) -> bool {
        self.solved[board]
    }

    /// Mark `word` as guessed without going through the heuristic
    ///
    /// # Errors
    /// Returns `SolverError::InvalidGuess` if `word` is not a vocabulary guess.
    pub fn record_guess(&mut self, word: Word) -> Result<(), SolverError> {
        if !self.vocabulary.contains(&word) {
            return Err(GuessError::NotInWordList(word).into());
        }
        self.used.insert(word);
        Ok(())
    }

    /// Ingest the feedback of one guess on all four boards and prune
    ///
    /// Runs node consistency on each board, then arc consistency across
    /// boards. Domain sizes never grow.
    ///
    /// # Errors
    /// - `InvalidGuess` / `MismatchedGuess`: rejected before any state changes.
    /// - `ContradictoryFeedback`: some domain is now empty. The pruning stays
    ///   applied; later guesses come from the fallback path.
    pub fn update_constraints(&mut self, feedback: &[Feedback; BOARDS]) -> Result<(), SolverError> {
        let guess = feedback[0].guess();
        if let Some(other) = feedback.iter().map(Feedback::guess).find(|&g| g != guess) {
            return Err(SolverError::MismatchedGuess {
                expected: guess,
                found: other,
            });
        }
        if !self.vocabulary.contains(&guess) {
            return Err(GuessError::NotInWordList(guess).into());
        }

        let before = self.domain_sizes();
        self.used.insert(guess);
        for (board, entry) in feedback.iter().enumerate() {
            self.history[board].push(*entry);
            if entry.is_solved() {
                self.solved[board] = true;
            }
        }

        let mut removed = 0;
        for board in 0..BOARDS {
            removed += self.enforce_node_consistency(board);
        }
        removed += self.enforce_arc_consistency();

        let after = self.domain_sizes();
        debug!(%guess, ?before, ?after, removed, "constraints updated");

        let empty: Vec<usize> = (0..BOARDS).filter(|&b| self.domains[b].is_empty()).collect();
        if empty.is_empty() {
            Ok(())
        } else {
            warn!(%guess, boards = ?empty, "feedback emptied a domain");
            Err(SolverError::ContradictoryFeedback { boards: empty })
        }
    }

    /// Drop every candidate of `board` that contradicts its recorded feedback
    ///
    /// Returns the number of words removed. Running it again without new
    /// feedback removes nothing.
    pub fn enforce_node_consistency(&mut self, board: usize) -> usize {
        node_consistency(&mut self.domains[board], &self.history[board])
    }

    /// Prune all boards against each other until a fixed point is reached
    pub fn enforce_arc_consistency(&mut self) -> usize {
        arc_consistency(
            &mut self.domains,
            &self.history,
            self.config.distinct_targets,
        )
    }

    /// Find one assignment of words to boards consistent with all feedback
    ///
    /// Works on copies of the domains; the solver itself is not modified.
    #[must_use]
    pub fn solve(&self) -> SearchOutcome {
        backtracking_search(
            &self.domains,
            &self.history,
            self.config.distinct_targets,
            self.config.search_node_limit,
        )
    }

    /// Pick the next word to guess and mark it used
    ///
    /// Same choice as [`Solver::suggest_next_guess`]; the word is then added
    /// to the used set so it is never proposed again.
    ///
    /// # Errors
    /// Returns `SolverError::VocabularyExhausted` when every word is used.
    pub fn generate_next_guess(&mut self) -> Result<Word, SolverError> {
        let guess = self.suggest_next_guess()?;
        self.used.insert(guess);
        Ok(guess)
    }

    /// Pick the next word to guess without marking it used
    ///
    /// Priority:
    /// 1. The configured opener, if still unused
    /// 2. The lone candidate of the first unsolved board with a singleton
    ///    domain (unless [`SingletonPolicy::Disabled`])
    /// 3. The unused word present in the most domains, ties broken at random
    /// 4. A uniformly random unused vocabulary word
    ///
    /// Only the random source advances. The guess is not removed from any
    /// domain here either. Once its feedback arrives, node consistency drops
    /// it from every board it did not solve.
    ///
    /// # Errors
    /// Returns `SolverError::VocabularyExhausted` when every word is used.
    pub fn suggest_next_guess(&mut self) -> Result<Word, SolverError> {
        match self
            .opener_guess()
            .or_else(|| self.singleton_guess())
            .or_else(|| self.coverage_guess())
        {
            Some(word) => Ok(word),
            None => self.fallback_guess(),
        }
    }

    fn opener_guess(&self) -> Option<Word> {
        self.config
            .opener
            .filter(|w| self.history[0].is_empty() && !self.used.contains(w))
    }

    fn singleton_guess(&self) -> Option<Word> {
        if self.config.singleton_policy == SingletonPolicy::Disabled {
            return None;
        }
        (0..BOARDS)
            .filter(|&b| !self.solved[b])
            .filter_map(|b| self.domains[b].singleton())
            .find(|w| !self.used.contains(w))
    }

    fn coverage_guess(&mut self) -> Option<Word> {
        let mut coverage: FxHashMap<Word, usize> = FxHashMap::default();
        for domain in self.domains.iter().filter(|d| !d.is_empty()) {
            for word in domain.iter().filter(|w| !self.used.contains(w)) {
                *coverage.entry(*word).or_insert(0) += 1;
            }
        }

        let best = coverage.values().copied().max()?;
        let mut ties: Vec<Word> = coverage
            .into_iter()
            .filter_map(|(word, n)| (n == best).then_some(word))
            .collect();
        ties.sort_unstable();
        debug!(coverage = best, ties = ties.len(), "coverage guess");
        ties.choose(&mut self.rng).copied()
    }

    fn fallback_guess(&mut self) -> Result<Word, SolverError> {
        let unused: Vec<Word> = self
            .vocabulary
            .guesses()
            .iter()
            .filter(|w| !self.used.contains(w))
            .copied()
            .collect();
        debug!(pool = unused.len(), "random fallback guess");
        unused
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::VocabularyExhausted)
    }
}
