//! Solve command
//!
//! Runs the solver against four known targets, recording the domain sizes
//! after every turn, then asks the backtracking search for an assignment.

use crate::core::{BOARDS, Feedback, Vocabulary, Word};
use crate::game::{Game, GameConfig, GameError, GameStatus};
use crate::solver::{SearchOutcome, Solver, SolverConfig, SolverError};
use rand::Rng;
use tracing::info;

/// One turn of a traced game
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub guess: Word,
    pub feedback: [Feedback; BOARDS],
    /// Domain sizes after this turn's feedback was applied
    pub domain_sizes: [usize; BOARDS],
    pub newly_solved: Vec<usize>,
}

/// Full record of a traced game
#[derive(Debug, Clone)]
pub struct SolveTrace {
    pub targets: [Word; BOARDS],
    pub steps: Vec<TraceStep>,
    pub status: GameStatus,
    pub search: SearchOutcome,
    pub solver_error: Option<SolverError>,
}

/// Play the solver against `targets` until the game ends, then search
///
/// Lowering `game_config.max_attempts` stops the trace early, which leaves
/// the search to finish from partial information.
///
/// # Errors
/// Returns a `GameError` if a target is not in the vocabulary or targets
/// repeat.
pub fn trace_solve<R: Rng>(
    vocabulary: &Vocabulary,
    targets: [Word; BOARDS],
    solver_config: SolverConfig,
    game_config: GameConfig,
    rng: R,
) -> Result<SolveTrace, GameError> {
    let mut game = Game::new(vocabulary, targets, game_config)?;
    let mut solver = Solver::with_rng(vocabulary, solver_config, rng);
    let mut steps = Vec::new();
    let mut solver_error = None;

    while game.status() == GameStatus::InProgress {
        let guess = match solver.generate_next_guess() {
            Ok(guess) => guess,
            Err(e) => {
                solver_error = Some(e);
                break;
            }
        };

        let turn = game.submit_word(guess)?;
        let (feedback, newly_solved) = (turn.feedback, turn.newly_solved.clone());
        if let Err(e) = solver.update_constraints(&feedback) {
            solver_error = Some(e);
        }

        info!(%guess, sizes = ?solver.domain_sizes(), "turn traced");
        steps.push(TraceStep {
            guess,
            feedback,
            domain_sizes: solver.domain_sizes(),
            newly_solved,
        });
    }

    Ok(SolveTrace {
        targets,
        steps,
        status: game.status(),
        search: solver.solve(),
        solver_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn trace_ends_with_targets_found() {
        let vocabulary = embedded_vocabulary();
        let targets = ["crane", "ghost", "speed", "plant"].map(w);
        let trace = trace_solve(
            &vocabulary,
            targets,
            SolverConfig::default(),
            GameConfig { max_attempts: 25 },
            StdRng::seed_from_u64(5),
        )
        .unwrap();

        assert!(!trace.steps.is_empty());
        assert!(trace.solver_error.is_none());
        assert_eq!(trace.status, GameStatus::Won);
        assert_eq!(trace.search, SearchOutcome::Found(targets));
    }

    #[test]
    fn domain_sizes_never_grow() {
        let vocabulary = embedded_vocabulary();
        let trace = trace_solve(
            &vocabulary,
            ["grate", "erase", "slate", "ghost"].map(w),
            SolverConfig::default(),
            GameConfig::default(),
            StdRng::seed_from_u64(8),
        )
        .unwrap();

        for pair in trace.steps.windows(2) {
            for board in 0..BOARDS {
                assert!(pair[1].domain_sizes[board] <= pair[0].domain_sizes[board]);
            }
        }
    }

    #[test]
    fn early_stop_still_finds_consistent_assignment() {
        let vocabulary = embedded_vocabulary();
        let targets = ["crane", "ghost", "speed", "plant"].map(w);
        let trace = trace_solve(
            &vocabulary,
            targets,
            SolverConfig {
                opener: Some(w("slate")),
                ..SolverConfig::default()
            },
            GameConfig { max_attempts: 3 },
            StdRng::seed_from_u64(2),
        )
        .unwrap();

        assert_eq!(trace.steps.len(), 3);
        assert_eq!(trace.steps[0].guess, w("slate"));
        let SearchOutcome::Found(assignment) = trace.search else {
            panic!("expected an assignment, got {:?}", trace.search);
        };
        for (board, word) in assignment.iter().enumerate() {
            for step in &trace.steps {
                assert_eq!(Feedback::evaluate(&step.guess, word), step.feedback[board]);
            }
        }
    }

    #[test]
    fn unknown_target_is_rejected() {
        let vocabulary = embedded_vocabulary();
        let result = trace_solve(
            &vocabulary,
            ["crane", "ghost", "speed", "qqqqq"].map(w),
            SolverConfig::default(),
            GameConfig::default(),
            StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(GameError::InvalidTarget(_))));
    }
}
