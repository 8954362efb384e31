//! Quordle CSP Solver
//!
//! Solves the four-board word puzzle as a constraint-satisfaction problem:
//! one candidate domain per board, pruned by node and arc consistency as
//! feedback arrives, with backtracking search and a coverage heuristic for
//! choosing guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use quordle_csp::core::{Feedback, Vocabulary, Word};
//! use quordle_csp::solver::{Solver, SolverConfig};
//!
//! let words = ["crane", "ghost", "speed", "plant", "slate"].map(|w| Word::new(w).unwrap());
//! let vocabulary = Vocabulary::from_words(words);
//! let targets = ["crane", "ghost", "speed", "plant"].map(|w| Word::new(w).unwrap());
//!
//! let mut solver = Solver::seeded(&vocabulary, SolverConfig::default(), 7);
//! let guess = solver.generate_next_guess().unwrap();
//! let feedback = targets.map(|t| Feedback::evaluate(&guess, &t));
//! solver.update_constraints(&feedback).unwrap();
//!
//! for board in 0..4 {
//!     assert!(solver.domain(board).contains(&targets[board]));
//! }
//! ```

// Core domain types
pub mod core;

// Constraint solver
pub mod solver;

// Four-board game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
