//! Display functions for game state

use super::formatters::{keyboard_line, scored_row, scored_to_emoji};
use crate::core::alphabet;
use crate::game::{GameSession, MAX_GUESSES};
use colored::Colorize;

/// Print the scored guesses so far, newest last
pub fn print_history(session: &GameSession) {
    for (i, scored) in session.history().iter().enumerate() {
        println!(
            "  {}  {}",
            format!("{}/{MAX_GUESSES}", i + 1).bright_black(),
            scored_row(scored)
        );
    }
}

/// Print the alphabet colored by what the guesses revealed
pub fn print_keyboard(session: &GameSession) {
    println!("  {}", keyboard_line(session.history()));
}

/// Print the end-of-game banner: celebration on a win, the answer on a
/// loss, and the emoji summary either way
pub fn print_game_over(session: &GameSession) {
    let answer = alphabet::upper(session.target().text());

    println!("\n{}", "═".repeat(60).bright_cyan());
    if session.finished() {
        let turn = session.guesses_used();
        let praise = match turn {
            1 => "🏆 Unbelievable!",
            2 => "⭐ Magnificent!",
            3 => "💫 Impressive!",
            4 => "✨ Splendid!",
            5 => "👍 Great!",
            _ => "✓ Phew!",
        };
        println!(
            "{}",
            format!("  You found the answer: \"{answer}\"").bright_green().bold()
        );
        println!(
            "  {} Solved in {}/{MAX_GUESSES} guesses",
            praise.bright_yellow().bold(),
            turn
        );
    } else {
        println!(
            "{}",
            format!("  Out of guesses! The answer was \"{answer}\"")
                .bright_red()
                .bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  Guess history:");
    for (i, scored) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            alphabet::upper(&scored.word()).bright_white().bold(),
            scored_to_emoji(scored)
        );
    }
    println!();
}
