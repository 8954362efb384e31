//! Command implementations

pub mod openers;
pub mod play;
pub mod simulate;
pub mod solve;

pub use openers::best_openers;
pub use play::run_play;
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, play_game, run_simulation};
pub use solve::{SolveTrace, TraceStep, trace_solve};
