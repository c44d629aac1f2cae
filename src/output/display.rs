//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::CheckResult;
use crate::core::NUM_ATTEMPTS;
use crate::game::Statistics;
use colored::Colorize;

/// Print the result of checking a guess against a target
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} → {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}", colored_row(&result.row), result.row.to_emoji());

    if !result.in_word_list {
        println!(
            "\n  {}",
            format!("{} is not in the word list", result.guess).red()
        );
    }
    println!();
}

/// Print the statistics of the games played in this process
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n   Played:        {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Streak:        {} (max {})", stats.current_streak, stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for guesses in 1..=NUM_ATTEMPTS {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }
    println!();
}
