//! Reveal command
//!
//! Prints the target word for a day and length without playing it.
//! Useful for checking what a given calendar day will serve.

use crate::core::alphabet;
use crate::game::daily;
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;

/// Print the word of the day
///
/// Defaults to the current day when no day number is given.
///
/// # Errors
///
/// Returns an error if the word list has no words of the requested
/// length.
pub fn run_reveal(words: &WordList, length: usize, day: Option<u64>) -> Result<()> {
    let day = day.unwrap_or_else(daily::today);
    let word = daily::word_for_day(words, length, day)?;

    println!(
        "Day {day}, {length} letters: {}",
        alphabet::upper(word.text()).bright_yellow().bold()
    );
    Ok(())
}
