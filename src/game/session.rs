//! Game session state machine
//!
//! A session owns the target word, the scored-guess history, and the
//! in-progress input. It delegates scoring to [`crate::core::score`] and
//! dictionary checks to the [`WordList`], and is plain data otherwise so
//! it can be serialized and restored losslessly.

use super::MAX_GUESSES;
use crate::core::{ScoredGuess, Word, alphabet, score};
use crate::wordlists::WordList;
use serde::{Deserialize, Serialize};

/// Result of submitting the current input as a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The guess was valid and scored, but did not win
    Scored(ScoredGuess),
    /// The guess matched the target; the session is now finished
    Won(ScoredGuess),
    /// The input is not a dictionary word; the session is unchanged
    NotAWord,
    /// The input does not fill the row exactly; the session is unchanged
    Incomplete,
    /// The session is already finished; the session is unchanged
    AlreadyFinished,
}

/// A single game: target word, guess history, and in-progress input.
///
/// The session is mutated only through [`push_letter`](Self::push_letter),
/// [`pop_letter`](Self::pop_letter), [`submit`](Self::submit), and
/// [`reset`](Self::reset). The guess budget is a presentation concern;
/// the session itself only distinguishes `in_progress` from `finished`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    target: Word,
    input: String,
    finished: bool,
    history: Vec<ScoredGuess>,
}

impl GameSession {
    /// Start a fresh session for the given target word.
    #[must_use]
    pub fn start(target: Word) -> Self {
        Self {
            target,
            input: String::new(),
            finished: false,
            history: Vec::new(),
        }
    }

    /// Append a letter to the in-progress input.
    ///
    /// The character is folded to lowercase with Turkish casing rules
    /// first. Returns `false` when the session is finished, the row is
    /// already full, or the character is not a Turkish letter.
    pub fn push_letter(&mut self, ch: char) -> bool {
        let folded = alphabet::fold_char(ch);
        if self.finished
            || !alphabet::is_letter(folded)
            || self.input.chars().count() >= self.target.len()
        {
            return false;
        }
        self.input.push(folded);
        true
    }

    /// Remove the last letter of the in-progress input.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn pop_letter(&mut self) -> bool {
        self.input.pop().is_some()
    }

    /// Submit the current input as a guess.
    ///
    /// A valid guess is scored and appended to the history, and the input
    /// is cleared; an exact match finishes the session. Every other case
    /// leaves the session untouched and reports why, so callers decide
    /// what to surface to the player.
    ///
    /// # Panics
    /// Will not panic - the `expect()` calls are guaranteed safe by the
    /// dictionary and length checks before them.
    pub fn submit(&mut self, words: &WordList) -> SubmitOutcome {
        if self.finished {
            return SubmitOutcome::AlreadyFinished;
        }
        if self.input.chars().count() != self.target.len() {
            return SubmitOutcome::Incomplete;
        }
        if !words.contains(&self.input) {
            return SubmitOutcome::NotAWord;
        }

        let guess = Word::new(&self.input).expect("dictionary words have valid letters");
        let scored = score(&guess, &self.target).expect("input length already checked");

        self.input.clear();
        self.history.push(scored.clone());

        if scored.is_win() {
            self.finished = true;
            SubmitOutcome::Won(scored)
        } else {
            SubmitOutcome::Scored(scored)
        }
    }

    /// Replace this session with a fresh one for a new target.
    pub fn reset(&mut self, target: Word) {
        *self = Self::start(target);
    }

    /// The hidden target word.
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The in-progress input, lowercase.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// All scored guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ScoredGuess] {
        &self.history
    }

    /// Whether the target has been guessed.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Number of guesses submitted so far.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Whether the guess budget is spent without a win.
    #[must_use]
    pub fn out_of_guesses(&self) -> bool {
        !self.finished && self.history.len() >= MAX_GUESSES
    }

    /// Whether the game is over, by win or by spent guess budget.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.finished || self.history.len() >= MAX_GUESSES
    }
}
