//! Check command
//!
//! Looks candidate words up in the dictionary and prints a verdict per
//! word, after the same Turkish case folding the game applies.

use crate::core::alphabet;
use crate::wordlists::WordList;
use colored::Colorize;

/// Print a dictionary verdict for each candidate
pub fn run_check(words: &WordList, candidates: &[String]) {
    for candidate in candidates {
        let folded = alphabet::fold(candidate);
        if words.contains(candidate) {
            println!("✅ {} {}", folded.green().bold(), "is playable".bright_black());
        } else {
            println!("❌ {} {}", folded.red().bold(), "is not in the word list".bright_black());
        }
    }
}
