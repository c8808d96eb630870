//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid [`Word`] instances, skipping blank lines and
/// any entries with characters outside the Turkish alphabet.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use kelimece::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use kelimece::wordlists::loader::words_from_slice;
/// use kelimece::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
