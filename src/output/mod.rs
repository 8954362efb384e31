//! Terminal output formatting
//!
//! Coloured boards and reports for the command-line driver.

pub mod display;
pub mod formatters;

pub use display::{print_openers, print_simulation_result, print_solve_trace, render_game};
