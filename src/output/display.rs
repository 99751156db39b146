//! Display functions for command results

use super::formatters::{format_puzzle, format_scored_word, max_word_width};
use crate::commands::SolveResult;
use colored::Colorize;

/// Print the ranked words, one per line
///
/// With `show_scores`, each line carries the score and pangrams are
/// highlighted.
pub fn print_words(result: &SolveResult, show_scores: bool) {
    if !show_scores {
        for scored in &result.words {
            println!("{}", scored.word);
        }
        return;
    }

    let width = max_word_width(&result.words);
    for scored in &result.words {
        let line = format_scored_word(scored, width);
        if scored.pangram {
            println!("{}", line.bright_yellow().bold());
        } else {
            println!("{line}");
        }
    }
}

/// Print totals for a solved puzzle
pub fn print_summary(result: &SolveResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        "PUZZLE:".bright_cyan().bold(),
        format_puzzle(&result.puzzle).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("   Words:       {}", result.words.len());
    println!(
        "   Points:      {}",
        result.total_score().to_string().bright_yellow()
    );
    println!(
        "   Pangrams:    {}",
        result.pangram_count().to_string().green()
    );
    for pangram in result.pangrams() {
        println!("     {}", pangram.bright_yellow());
    }

    if result.words.is_empty() {
        println!("\n{}", "No words found".red().bold());
    }
}
