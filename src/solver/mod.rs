//! Quordle constraint solver
//!
//! Domains per board, node and arc consistency, backtracking search and the
//! next-guess heuristic.

mod config;
mod consistency;
mod domain;
mod engine;
mod error;
mod opening;
mod search;

pub use config::{SingletonPolicy, SolverConfig};
pub use consistency::{arc_consistency, consistent_with_all, is_consistent, node_consistency, propagate};
pub use domain::Domain;
pub use engine::Solver;
pub use error::SolverError;
pub use opening::{REPEAT_PENALTY, rank_openers};
pub use search::{Assignment, SearchOutcome, backtracking_search};
