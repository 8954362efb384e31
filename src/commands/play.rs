//! Play command
//!
//! Text-mode game against four random targets. The solver follows the same
//! feedback as the player and answers `hint` requests.

use crate::core::{Vocabulary, Word};
use crate::game::{Game, GameConfig, GameStatus};
use crate::output::formatters::domain_summary;
use crate::output::render_game;
use crate::solver::{Solver, SolverConfig};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::warn;

/// Run one interactive game reading guesses from `input`
///
/// Commands: `hint` (or `h`) asks the solver for a guess, `quit` (or `q`)
/// gives up and reveals the targets. End of input also ends the game.
///
/// # Errors
///
/// Returns an error on I/O failure or if the vocabulary has fewer than four
/// answers.
pub fn run_play<R: Rng, I: BufRead, O: Write>(
    vocabulary: &Vocabulary,
    game_config: GameConfig,
    solver_config: SolverConfig,
    mut rng: R,
    mut input: I,
    mut output: O,
) -> Result<GameStatus> {
    let mut game = Game::new_random(vocabulary, &mut rng, game_config)?;
    let mut solver = Solver::with_rng(vocabulary, solver_config, rng);
    let mut hint: Option<Word> = None;

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Quordle - Interactive Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess four hidden words at once in {} tries.",
        game.config().max_attempts
    )?;
    writeln!(output, "Commands: 'hint' for a suggestion, 'quit' to give up\n")?;

    while game.status() == GameStatus::InProgress {
        write!(
            output,
            "Guess {}/{}: ",
            game.attempts_used() + 1,
            game.config().max_attempts
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "hint" | "h" => {
                let suggestion = match hint {
                    Some(word) => Ok(word),
                    None => solver.suggest_next_guess(),
                };
                match suggestion {
                    Ok(word) => {
                        hint = Some(word);
                        writeln!(
                            output,
                            "💡 Try {}  (candidates {})",
                            word.text().to_uppercase().bright_yellow().bold(),
                            domain_summary(&solver.domain_sizes())
                        )?;
                    }
                    Err(e) => writeln!(output, "💡 No hint available: {e}")?,
                }
            }
            guess => match game.submit(guess).map(|turn| turn.feedback) {
                Ok(feedback) => {
                    if let Err(e) = solver.update_constraints(&feedback) {
                        warn!(error = %e, "solver could not follow the feedback");
                    }
                    hint = None;
                    writeln!(output)?;
                    write!(output, "{}", render_game(&game))?;
                    writeln!(output)?;
                }
                Err(e) => writeln!(output, "{} {e}", "❌".red())?,
            },
        }
    }

    let targets: Vec<String> = game.targets().iter().map(|w| w.text().to_uppercase()).collect();
    match game.status() {
        GameStatus::Won => writeln!(
            output,
            "{}",
            format!("🎉 All four solved in {} guesses!", game.attempts_used())
                .green()
                .bold()
        )?,
        GameStatus::Lost | GameStatus::InProgress => {
            writeln!(output, "The words were: {}", targets.join(" ").bright_yellow())?;
        }
    }
    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(
            ["crane", "ghost", "speed", "plant"].map(|w| Word::new(w).unwrap()),
        )
    }

    fn play(script: &str) -> (GameStatus, String) {
        play_with(SolverConfig::default(), script)
    }

    fn play_with(config: SolverConfig, script: &str) -> (GameStatus, String) {
        colored::control::set_override(false);
        let vocabulary = vocab();
        let mut output = Vec::new();
        let status = run_play(
            &vocabulary,
            GameConfig::default(),
            config,
            StdRng::seed_from_u64(4),
            Cursor::new(script.as_bytes()),
            &mut output,
        )
        .unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn guessing_every_target_wins() {
        let (status, output) = play("crane\nghost\nspeed\nplant\n");
        assert_eq!(status, GameStatus::Won);
        assert!(output.contains("All four solved in 4 guesses"));
    }

    #[test]
    fn invalid_guess_is_reported_and_not_counted() {
        let (status, output) = play("zzzzz\nquit\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("'zzzzz' is not in the word list"));
        assert!(output.contains("Guess 1/9"));
        assert!(!output.contains("Guess 2/9"));
    }

    #[test]
    fn hint_suggests_a_vocabulary_word() {
        let (_, output) = play("hint\nhint\nquit\n");
        let suggestions: Vec<&str> = output.lines().filter(|l| l.contains("💡 Try")).collect();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], suggestions[1]);
        assert!(["CRANE", "GHOST", "SPEED", "PLANT"].iter().any(|w| suggestions[0].contains(w)));
    }

    #[test]
    fn ignored_hint_is_offered_again() {
        let config = SolverConfig {
            opener: Some(Word::new("crane").unwrap()),
            ..SolverConfig::default()
        };
        let (_, output) = play_with(config, "hint\nghost\nspeed\nplant\nhint\nquit\n");
        let suggestions: Vec<&str> = output.lines().filter(|l| l.contains("💡 Try")).collect();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|l| l.contains("CRANE")));
        assert!(!output.contains("No hint available"));
    }

    #[test]
    fn end_of_input_reveals_targets() {
        let (status, output) = play("");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("The words were:"));
    }
}
