//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Tiles are still revealed one by one.

use crate::animation::{Clock, FRAME_MS, RowReveal};
use crate::core::{GRID_SIZE, GuessRow, NUM_ATTEMPTS};
use crate::game::{GameSession, Outcome, Phase, Statistics, SubmitResult};
use crate::output::formatters::colored_tile;
use crate::output::print_statistics;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Run the simple interactive CLI mode until the player quits or stdin closes
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<C: Clock, R: Rng>(
    session: &mut GameSession<'_, C, R>,
    stats: &mut Statistics,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle - Simple Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {GRID_SIZE}-letter word in {NUM_ATTEMPTS} tries.");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    while let Some(input) = get_user_input(&format!(
        "Guess {}/{NUM_ATTEMPTS}",
        session.attempt() + 1
    ))? {
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.restart();
                println!("\n🔄 New game started!\n");
            }
            guess => {
                if guess.len() != GRID_SIZE || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("❌ Enter exactly {GRID_SIZE} letters\n");
                    continue;
                }

                while session.delete_letter() {}
                for ch in guess.chars() {
                    session.append_letter(ch);
                }

                match session.submit_guess() {
                    SubmitResult::Ignored => {}
                    SubmitResult::InvalidWord => {
                        println!("❌ {} is not in the word list\n", guess.to_uppercase());
                    }
                    SubmitResult::Accepted { row, .. } => {
                        if let Some(outcome) = animate_reveal(session, &row)? {
                            stats.record(outcome, session.attempt());
                            announce(outcome, session);

                            if !play_again()? {
                                break;
                            }
                            session.restart();
                            println!("\n🔄 New game started!\n");
                        }
                    }
                }
            }
        }
    }

    print_statistics(stats);
    println!("👋 Thanks for playing!\n");
    Ok(())
}

/// Tick the session until its reveal finishes, printing tiles as they settle
fn animate_reveal<C: Clock, R: Rng>(
    session: &mut GameSession<'_, C, R>,
    row: &GuessRow,
) -> io::Result<Option<Outcome>> {
    let mut stdout = io::stdout();
    let mut shown = 0;
    print!("  ");

    loop {
        let outcome = session.tick();
        let settled = session
            .reveal()
            .map_or(GRID_SIZE, RowReveal::completed_tiles);

        for &result in &row.letters()[shown..settled] {
            print!("{}", colored_tile(result));
        }
        shown = shown.max(settled);
        stdout.flush()?;

        if session.phase() != Phase::Revealing {
            println!("   {}\n", row.to_emoji());
            return Ok(outcome);
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }
}

fn announce<C: Clock, R: Rng>(outcome: Outcome, session: &GameSession<'_, C, R>) {
    match outcome {
        Outcome::Won => {
            let praise = match session.attempt() {
                1 => "🏆 Genius!",
                2 => "⭐ Magnificent!",
                3 => "💫 Impressive!",
                4 => "✨ Splendid!",
                5 => "👍 Great!",
                _ => "😅 Phew!",
            };
            println!("{}\n", praise.bright_green().bold());
        }
        Outcome::Lost => {
            println!(
                "The word was {}\n",
                session.target().text().bright_yellow().bold()
            );
        }
        Outcome::InProgress => {}
    }
}

fn play_again() -> io::Result<bool> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?
            .as_deref()
            .map(str::to_lowercase)
            .as_deref(),
        Some("yes" | "y")
    ))
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
