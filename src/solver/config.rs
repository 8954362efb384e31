//! Solver configuration

use crate::core::Word;

/// What the guess heuristic does when a board's domain has collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingletonPolicy {
    /// Guess the lone candidate of the first unsolved board that has one
    #[default]
    Greedy,
    /// Ignore singletons and always use the coverage heuristic
    Disabled,
}

/// Tunables for a [`Solver`](super::Solver)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub singleton_policy: SingletonPolicy,
    /// Enforce that the four targets are pairwise distinct words
    pub distinct_targets: bool,
    /// Give up the backtracking search after this many nodes (`None` = unbounded)
    pub search_node_limit: Option<usize>,
    /// Fixed first guess, used while it is still unused
    pub opener: Option<Word>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            singleton_policy: SingletonPolicy::Greedy,
            distinct_targets: true,
            search_node_limit: Some(1_000_000),
            opener: None,
        }
    }
}
