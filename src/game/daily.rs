//! Daily word selection
//!
//! Picks the word of the day deterministically from the calendar date and
//! the puzzle length, so every player sees the same word on the same day.

use crate::core::Word;
use crate::wordlists::WordList;
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// Errors that can occur during word selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The list has no words of the requested length
    NoEligibleWords { length: usize },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEligibleWords { length } => {
                write!(f, "word list has no words of length {length}")
            }
        }
    }
}

impl std::error::Error for SelectError {}

/// Current day number: whole days since the Unix epoch, in UTC.
///
/// This is the only place the clock is read; everything downstream takes
/// an explicit day number so selection stays testable.
#[must_use]
pub fn today() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() / SECONDS_PER_DAY)
}

/// The word of the day for the given puzzle length.
///
/// Selection is a pure function of `(day, length)`: the pair is hashed
/// into an index over the eligible words, so consecutive days jump around
/// the list instead of walking it in order, and every call on the same
/// day returns the same word.
///
/// # Errors
///
/// Returns [`SelectError::NoEligibleWords`] if the list has no words of
/// the requested length.
///
/// # Examples
/// ```
/// use kelimece::game::daily::word_for_day;
/// use kelimece::wordlists::WordList;
///
/// let list = WordList::embedded();
/// let word = word_for_day(&list, 5, 20_000).unwrap();
/// assert_eq!(word.len(), 5);
/// ```
pub fn word_for_day(list: &WordList, length: usize, day: u64) -> Result<&Word, SelectError> {
    let eligible: Vec<&Word> = list.of_length(length).collect();
    if eligible.is_empty() {
        return Err(SelectError::NoEligibleWords { length });
    }

    let mut hasher = FxHasher::default();
    day.hash(&mut hasher);
    length.hash(&mut hasher);
    let index = (hasher.finish() % eligible.len() as u64) as usize;

    Ok(eligible[index])
}
