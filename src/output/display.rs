//! Display functions for command results

use super::formatters::{blank_row, create_progress_bar, domain_summary, feedback_tiles};
use crate::commands::{SimulationResult, SolveTrace};
use crate::core::{BOARDS, Word};
use crate::game::{Game, GameStatus};
use crate::solver::SearchOutcome;
use colored::Colorize;
use std::collections::BTreeMap;

const BOARD_GAP: &str = "   ";

/// Render every board side by side, one row per guess
///
/// A board shows no rows after the turn that solved it.
#[must_use]
pub fn render_game(game: &Game<'_>) -> String {
    let mut out = String::new();
    for (i, turn) in game.turns().iter().enumerate() {
        let number = i + 1;
        let row: Vec<String> = (0..BOARDS)
            .map(|board| match game.solved_at(board) {
                Some(at) if at < number => blank_row(),
                _ => feedback_tiles(&turn.feedback[board]),
            })
            .collect();
        out.push_str(&format!("{number:>2}  {}\n", row.join(BOARD_GAP)));
    }
    out
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Wins:             {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate() * 100.0).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    if result.solver_errors > 0 {
        println!(
            "   Solver errors:    {}",
            result.solver_errors.to_string().red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Guesses per win:".bright_cyan().bold());
    print_distribution(&result.guess_distribution, result.wins);

    println!("\n🧩 {}", "Boards solved per game:".bright_cyan().bold());
    print_distribution(&result.boards_distribution, result.games);
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    let max_count = distribution.values().copied().max().unwrap_or(0);
    for (&key, &count) in distribution {
        let pct = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        let bar = create_progress_bar(count, max_count, 40);
        println!("   {key:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print a traced solve, turn by turn, followed by the search result
pub fn print_solve_trace(trace: &SolveTrace) {
    let targets: Vec<String> = trace.targets.iter().map(|w| w.text().to_uppercase()).collect();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", targets.join(" ").bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in trace.steps.iter().enumerate() {
        let rows: Vec<String> = step.feedback.iter().map(feedback_tiles).collect();
        println!(
            "\nTurn {}: {}",
            i + 1,
            step.guess.text().to_uppercase().bright_white().bold()
        );
        println!("  {}", rows.join(BOARD_GAP));
        println!("  Candidates: {}", domain_summary(&step.domain_sizes));
        if !step.newly_solved.is_empty() {
            let boards: Vec<String> = step.newly_solved.iter().map(|b| (b + 1).to_string()).collect();
            println!("  Solved board {}", boards.join(", ").green());
        }
    }

    println!();
    match trace.status {
        GameStatus::Won => println!(
            "{}",
            format!("✅ All boards solved in {} guesses!", trace.steps.len())
                .green()
                .bold()
        ),
        GameStatus::Lost | GameStatus::InProgress => println!(
            "{}",
            format!("❌ Stopped after {} guesses", trace.steps.len())
                .red()
                .bold()
        ),
    }
    if let Some(error) = &trace.solver_error {
        println!("{} {error}", "Solver:".yellow());
    }

    print!("🔎 Backtracking search: ");
    match &trace.search {
        SearchOutcome::Found(assignment) => println!("{}", format_words(assignment).bright_green()),
        SearchOutcome::NotFound => println!("{}", "not found".red()),
        SearchOutcome::Aborted { nodes } => {
            println!("{}", format!("aborted after {nodes} nodes").yellow());
        }
    }
}

/// Print a ranked list of opening words
pub fn print_openers(ranked: &[(Word, i64)]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (i, (word, score)) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}",
            i + 1,
            word.text().to_uppercase().bright_white().bold(),
            score.to_string().bright_yellow()
        );
    }
}

fn format_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}
