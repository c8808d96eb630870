//! Simple interactive CLI mode
//!
//! Line-based daily game without the TUI.

use crate::game::{MAX_GUESSES, SessionStore, SubmitOutcome, daily, resume_or_start};
use crate::output::{print_game_over, print_history, print_keyboard};
use crate::wordlists::WordList;
use anyhow::Result;
use std::io::{self, Write};

/// Run the line-based game mode
///
/// # Errors
///
/// Returns an error if the word list has no words of the requested
/// length, or when reading input or writing the save fails.
pub fn run_simple(
    words: &WordList,
    store: &dyn SessionStore,
    length: usize,
    fresh: bool,
) -> Result<()> {
    let day = daily::today();
    let mut session = resume_or_start(store, words, length, day, fresh)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Kelimece - Daily Turkish Wordle               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {length}-letter word of the day in {MAX_GUESSES} tries.");
    println!("After each guess the row is colored:\n");
    println!("  - Green: right letter, right spot");
    println!("  - Yellow: right letter, wrong spot");
    println!("  - Gray: letter not in the word\n");
    println!("Commands: 'quit' to exit\n");

    if session.is_over() {
        println!("Today's game is already over. Come back tomorrow!");
        print_game_over(&session);
        return Ok(());
    }

    if !session.history().is_empty() {
        println!("Resuming today's game:\n");
        print_history(&session);
        print_keyboard(&session);
        println!();
    }

    while !session.is_over() {
        let prompt = format!("Guess {}/{MAX_GUESSES}", session.guesses_used() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Progress saved. See you tomorrow!\n");
            return Ok(());
        };

        match line.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Progress saved. See you tomorrow!\n");
                return Ok(());
            }
            guess => {
                // A rejected guess stays in the session input, so drain
                // whatever is left before typing the next one
                while session.pop_letter() {}
                for ch in guess.chars() {
                    session.push_letter(ch);
                }

                match session.submit(words) {
                    SubmitOutcome::Scored(_) | SubmitOutcome::Won(_) => {
                        store.save(length, &session)?;
                        println!();
                        print_history(&session);
                        print_keyboard(&session);
                        println!();
                    }
                    SubmitOutcome::NotAWord => {
                        println!("❌ Word not found: \"{}\"\n", session.input());
                    }
                    SubmitOutcome::Incomplete => {
                        println!("❌ Enter a {length}-letter word\n");
                    }
                    SubmitOutcome::AlreadyFinished => {}
                }
            }
        }
    }

    print_game_over(&session);
    Ok(())
}

/// Prompt for and read one trimmed line; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
