//! Game orchestration
//!
//! Everything above the scoring core: daily word selection, the session
//! state machine, the keyboard projection, and session persistence.

pub mod daily;
mod keyboard;
mod session;
mod store;

pub use keyboard::{KeyStatus, key_statuses};
pub use session::{GameSession, SubmitOutcome};
pub use store::{JsonFileStore, MemoryStore, SessionStore};

use crate::wordlists::WordList;
use anyhow::Result;

/// Number of guesses a player gets before the round ends.
pub const MAX_GUESSES: usize = 6;

/// Load today's session from the store, or start a fresh one.
///
/// A saved session is resumed only when its target matches the word of
/// the day for this length; a save left over from an earlier day (or a
/// different word list) is discarded. Passing `fresh` skips the saved
/// session entirely. Newly started sessions are written back to the
/// store right away.
///
/// # Errors
///
/// Fails when the list has no words of the requested length or when the
/// store cannot be read or written.
pub fn resume_or_start(
    store: &dyn SessionStore,
    words: &WordList,
    length: usize,
    day: u64,
    fresh: bool,
) -> Result<GameSession> {
    let target = daily::word_for_day(words, length, day)?;

    if !fresh
        && let Some(saved) = store.load(length)?
        && saved.target() == target
    {
        return Ok(saved);
    }

    let session = GameSession::start(target.clone());
    store.save(length, &session)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    const DAY: u64 = 20_000;

    /// A list word that is guaranteed not to be the target.
    fn other_word(target: &Word) -> Word {
        let text = if target.text() == "kapak" { "kalem" } else { "kapak" };
        Word::new(text).unwrap()
    }

    fn play_one_guess(session: &mut GameSession, words: &WordList, guess: &Word) {
        for &ch in guess.chars() {
            session.push_letter(ch);
        }
        assert!(matches!(session.submit(words), SubmitOutcome::Scored(_)));
    }

    #[test]
    fn starts_fresh_without_a_save() {
        let words = WordList::embedded();
        let store = MemoryStore::new();

        let session = resume_or_start(&store, &words, 5, DAY, false).unwrap();

        assert_eq!(session.target(), daily::word_for_day(&words, 5, DAY).unwrap());
        assert!(session.history().is_empty());
        assert!(!session.finished());
    }

    #[test]
    fn new_session_is_written_to_the_store() {
        let words = WordList::embedded();
        let store = MemoryStore::new();

        let session = resume_or_start(&store, &words, 5, DAY, false).unwrap();

        assert_eq!(store.load(5).unwrap(), Some(session));
    }

    #[test]
    fn resumes_a_matching_save() {
        let words = WordList::embedded();
        let store = MemoryStore::new();
        let target = daily::word_for_day(&words, 5, DAY).unwrap().clone();

        let mut saved = GameSession::start(target.clone());
        play_one_guess(&mut saved, &words, &other_word(&target));
        store.save(5, &saved).unwrap();

        let resumed = resume_or_start(&store, &words, 5, DAY, false).unwrap();
        assert_eq!(resumed, saved);
        assert_eq!(resumed.guesses_used(), 1);
    }

    #[test]
    fn discards_a_stale_save() {
        let words = WordList::embedded();
        let store = MemoryStore::new();
        let today = daily::word_for_day(&words, 5, DAY).unwrap().clone();

        // A session left over from some other day's word
        let stale = GameSession::start(other_word(&today));
        store.save(5, &stale).unwrap();

        let session = resume_or_start(&store, &words, 5, DAY, false).unwrap();
        assert_eq!(session.target(), &today);
        assert!(session.history().is_empty());
    }

    #[test]
    fn fresh_flag_discards_a_matching_save() {
        let words = WordList::embedded();
        let store = MemoryStore::new();
        let target = daily::word_for_day(&words, 5, DAY).unwrap().clone();

        let mut saved = GameSession::start(target.clone());
        play_one_guess(&mut saved, &words, &other_word(&target));
        store.save(5, &saved).unwrap();

        let session = resume_or_start(&store, &words, 5, DAY, true).unwrap();
        assert!(session.history().is_empty());

        // The blank session replaced the old save
        assert_eq!(store.load(5).unwrap(), Some(session));
    }

    #[test]
    fn lengths_resume_independently() {
        let words = WordList::embedded();
        let store = MemoryStore::new();

        let four = resume_or_start(&store, &words, 4, DAY, false).unwrap();
        let five = resume_or_start(&store, &words, 5, DAY, false).unwrap();

        assert_eq!(four.target().len(), 4);
        assert_eq!(five.target().len(), 5);
        assert_eq!(store.load(4).unwrap(), Some(four));
        assert_eq!(store.load(5).unwrap(), Some(five));
    }

    #[test]
    fn missing_length_is_an_error() {
        let words = WordList::embedded();
        let store = MemoryStore::new();

        assert!(resume_or_start(&store, &words, 9, DAY, false).is_err());
    }
}
