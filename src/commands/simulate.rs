//! Simulate command
//!
//! Plays many independent games with the constraint solver against random
//! targets and collects statistics. Trials run in parallel; each one owns its
//! own `Solver`, `Game` and random source.

use crate::core::{BOARDS, Vocabulary, Word};
use crate::game::{Game, GameConfig, GameError, GameStatus};
use crate::solver::{Solver, SolverConfig, SolverError};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Settings for a batch of simulated games
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Trial `i` is seeded with `seed + i`
    pub seed: u64,
    pub solver: SolverConfig,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            solver: SolverConfig::default(),
            game: GameConfig::default(),
            show_progress: false,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub targets: [Word; BOARDS],
    pub guesses: Vec<Word>,
    pub status: GameStatus,
    pub boards_solved: usize,
    /// Set when the solver stopped before the attempt budget ran out
    pub solver_error: Option<SolverError>,
}

impl GameRecord {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Aggregate statistics of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub games: usize,
    pub wins: usize,
    /// Guesses needed per won game
    pub guess_distribution: BTreeMap<usize, usize>,
    /// Boards solved per game, wins included
    pub boards_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub solver_errors: usize,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    fn from_records(records: &[GameRecord], duration: Duration) -> Self {
        let mut guess_distribution = BTreeMap::new();
        let mut boards_distribution = BTreeMap::new();
        let mut wins = 0;
        let mut winning_guesses = 0;

        for record in records {
            *boards_distribution.entry(record.boards_solved).or_insert(0) += 1;
            if record.won() {
                wins += 1;
                winning_guesses += record.guesses.len();
                *guess_distribution.entry(record.guesses.len()).or_insert(0) += 1;
            }
        }

        Self {
            games: records.len(),
            wins,
            guess_distribution,
            boards_distribution,
            average_guesses: if wins > 0 {
                winning_guesses as f64 / wins as f64
            } else {
                0.0
            },
            solver_errors: records.iter().filter(|r| r.solver_error.is_some()).count(),
            duration,
        }
    }
}

/// Play one game to completion, letting the solver pick every guess
///
/// The solver and game share nothing but the vocabulary. Contradictory
/// feedback is logged and play continues from the solver's fallback path;
/// any other solver error ends the game early.
///
/// # Errors
/// Returns a `GameError` if the game rejects a solver guess, which only
/// happens when the solver proposes a word outside the vocabulary.
pub fn play_game<R: Rng>(
    mut game: Game<'_>,
    mut solver: Solver<'_, R>,
) -> Result<GameRecord, GameError> {
    let mut solver_error = None;

    while game.status() == GameStatus::InProgress {
        let guess = match solver.generate_next_guess() {
            Ok(guess) => guess,
            Err(e) => {
                warn!(error = %e, "solver gave up");
                solver_error = Some(e);
                break;
            }
        };

        let feedback = game.submit_word(guess)?.feedback;
        match solver.update_constraints(&feedback) {
            Ok(()) | Err(SolverError::ContradictoryFeedback { .. }) => {}
            Err(e) => {
                solver_error = Some(e);
                break;
            }
        }
    }

    Ok(GameRecord {
        targets: *game.targets(),
        guesses: game.turns().iter().map(|t| t.guess).collect(),
        status: game.status(),
        boards_solved: (0..BOARDS).filter(|&b| game.is_solved(b)).count(),
        solver_error,
    })
}

fn run_trial(
    vocabulary: &Vocabulary,
    config: &SimulationConfig,
    trial: usize,
) -> Result<GameRecord, GameError> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(trial as u64));
    let game = Game::new_random(vocabulary, &mut rng, config.game)?;
    let solver = Solver::with_rng(vocabulary, config.solver.clone(), rng);
    play_game(game, solver)
}

/// Run `config.games` independent games in parallel
///
/// Results are reproducible for a given seed regardless of thread count.
///
/// # Errors
/// Returns `GameError::NotEnoughAnswers` if the vocabulary cannot supply four
/// distinct targets.
pub fn run_simulation(
    vocabulary: &Vocabulary,
    config: &SimulationConfig,
) -> Result<SimulationResult, GameError> {
    info!(games = config.games, seed = config.seed, "starting simulation");

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let records = (0..config.games)
        .into_par_iter()
        .map(|trial| {
            let record = run_trial(vocabulary, config, trial);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let result = SimulationResult::from_records(&records, start.elapsed());
    info!(
        wins = result.wins,
        average = result.average_guesses,
        "simulation finished"
    );
    Ok(result)
}
