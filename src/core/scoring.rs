//! Guess scoring
//!
//! Scores a guess against the target word with Wordle's feedback rules:
//! - `Matched`: right letter, right position
//! - `Present`: right letter, wrong position
//! - `Absent`: no unmatched occurrence of the letter in the target
//!
//! Exact matches are resolved first, then the remaining target letters are
//! consumed for present-matches in guess order, so a repeated guess letter
//! is marked `Present` at most as many times as it has unmatched occurrences
//! in the target.

use super::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-position classification of a guess character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Right letter in the right position
    Matched,
    /// Letter exists in the target at a different, not-yet-matched position
    Present,
    /// No unmatched occurrence of the letter remains in the target
    Absent,
}

/// A guess character paired with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredLetter {
    pub ch: char,
    pub status: LetterStatus,
}

/// The scored form of one submitted guess
///
/// An ordered sequence of [`ScoredLetter`], always exactly as long as the
/// target word. Produced once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoredGuess {
    letters: Vec<ScoredLetter>,
}

/// Error type for scoring defects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Guess and target disagree on length; nothing is scored.
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => write!(
                f,
                "Guess is {guess} letters but the target is {target} letters"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score `guess` against `target`
///
/// Purely a function of its inputs; no hidden state.
///
/// # Algorithm
/// 1. First pass: mark exact positional matches; collect every unmatched
///    target letter into a multiset.
/// 2. Second pass: walk the unmatched guess positions in order, consuming
///    one occurrence from the multiset per `Present`, otherwise `Absent`.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the two words differ in length.
/// The guess is never truncated or padded.
///
/// # Examples
/// ```
/// use kelimece::core::{LetterStatus, Word, score};
///
/// let target = Word::new("kapak").unwrap();
/// let guess = Word::new("kaçak").unwrap();
/// let scored = score(&guess, &target).unwrap();
///
/// let statuses: Vec<_> = scored.letters().iter().map(|l| l.status).collect();
/// assert_eq!(
///     statuses,
///     [
///         LetterStatus::Matched, // k
///         LetterStatus::Matched, // a
///         LetterStatus::Absent,  // ç
///         LetterStatus::Matched, // a
///         LetterStatus::Matched, // k
///     ]
/// );
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<ScoredGuess, ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut statuses = vec![LetterStatus::Absent; target.len()];
    let mut remaining: FxHashMap<char, u8> = FxHashMap::default();

    // First pass: exact matches; unmatched target letters feed the multiset.
    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            statuses[i] = LetterStatus::Matched;
        } else {
            *remaining.entry(t).or_insert(0) += 1;
        }
    }

    // Second pass: consume the multiset for present-matches in guess order.
    for (i, &g) in guess.chars().iter().enumerate() {
        if statuses[i] == LetterStatus::Matched {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            statuses[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    let letters = guess
        .chars()
        .iter()
        .zip(statuses)
        .map(|(&ch, status)| ScoredLetter { ch, status })
        .collect();

    Ok(ScoredGuess { letters })
}

impl ScoredGuess {
    /// The scored letters in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[ScoredLetter] {
        &self.letters
    }

    /// Number of letters in the guess
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True for a zero-length guess; never produced by [`score`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if every position is `Matched` (the winning condition)
    ///
    /// Equivalent to folded-string equality of guess and target.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.status == LetterStatus::Matched)
    }

    /// The guessed word as text, reassembled from the scored letters
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.ch).collect()
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.letters.iter().filter(|l| l.status == status).count()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}
