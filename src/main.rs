//! Quordle solver - CLI
//!
//! Plays, traces and benchmarks a constraint-satisfaction solver for the
//! four-board word puzzle.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use quordle_csp::{
    commands::{SimulationConfig, best_openers, run_play, run_simulation, trace_solve},
    core::{BOARDS, Vocabulary, Word},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    logging::init_logging,
    output::{print_openers, print_simulation_result, print_solve_trace},
    solver::{SingletonPolicy, SolverConfig},
    wordlists::{embedded_vocabulary, loader::vocabulary_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "quordle",
    about = "Quordle solver using node/arc consistency and backtracking search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for targets and tie-breaks (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Never guess a board's lone remaining candidate ahead of the coverage heuristic
    #[arg(long, global = true)]
    no_singleton: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive text game with solver hints (default)
    Play {
        /// Attempts allowed
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Trace the solver against four given targets
    Solve {
        /// The four target words
        #[arg(num_args = BOARDS, required = true)]
        targets: Vec<Word>,

        /// Fixed first guess
        #[arg(short = 'f', long)]
        opener: Option<Word>,

        /// Attempts allowed before the backtracking search takes over
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Play many random games and report statistics
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Fixed first guess
        #[arg(short = 'f', long)]
        opener: Option<Word>,

        /// Attempts allowed per game
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,
    },

    /// Rank opening words by positional letter frequency
    Openers {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vocabulary> {
    if wordlist == "embedded" {
        return Ok(embedded_vocabulary());
    }
    let vocabulary = vocabulary_from_file(wordlist)
        .with_context(|| format!("failed to load word list from {wordlist}"))?;
    if vocabulary.answers().len() < BOARDS {
        return Err(anyhow!(
            "word list {wordlist} has {} usable words, need at least {BOARDS}",
            vocabulary.answers().len()
        ));
    }
    Ok(vocabulary)
}

fn solver_config(cli: &Cli, vocabulary: &Vocabulary, opener: Option<Word>) -> Result<SolverConfig> {
    if let Some(word) = opener {
        vocabulary
            .validate_guess(word.text())
            .context("opener must be a valid guess")?;
    }
    Ok(SolverConfig {
        singleton_policy: if cli.no_singleton {
            SingletonPolicy::Disabled
        } else {
            SingletonPolicy::Greedy
        },
        opener,
        ..SolverConfig::default()
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose).context("failed to initialise logging")?;

    let vocabulary = load_vocabulary(&cli.wordlist)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        guesses = vocabulary.guesses().len(),
        answers = vocabulary.answers().len(),
        "vocabulary ready"
    );

    let command = cli.command.take().unwrap_or(Commands::Play {
        max_attempts: DEFAULT_MAX_ATTEMPTS,
    });

    match command {
        Commands::Play { max_attempts } => {
            let config = solver_config(&cli, &vocabulary, None)?;
            run_play(
                &vocabulary,
                GameConfig { max_attempts },
                config,
                StdRng::seed_from_u64(seed),
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
        }
        Commands::Solve {
            targets,
            opener,
            max_attempts,
        } => {
            let targets: [Word; BOARDS] = targets
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("expected exactly {BOARDS} target words"))?;
            let config = solver_config(&cli, &vocabulary, opener)?;
            let trace = trace_solve(
                &vocabulary,
                targets,
                config,
                GameConfig { max_attempts },
                StdRng::seed_from_u64(seed),
            )?;
            print_solve_trace(&trace);
        }
        Commands::Simulate {
            count,
            opener,
            max_attempts,
        } => {
            println!("🎯 Simulating {count} games (seed {seed})...");
            let config = SimulationConfig {
                games: count,
                seed,
                solver: solver_config(&cli, &vocabulary, opener)?,
                game: GameConfig { max_attempts },
                show_progress: true,
            };
            let result = run_simulation(&vocabulary, &config)?;
            print_simulation_result(&result);
        }
        Commands::Openers { count } => {
            print_openers(&best_openers(&vocabulary, count));
        }
    }
    Ok(())
}
