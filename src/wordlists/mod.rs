//! Turkish word list for the game
//!
//! Provides the embedded word list compiled into the binary plus the
//! lookup structure shared by word selection and guess validation.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, alphabet};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Dictionary of playable words with an index for membership checks.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from already-validated words.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().map(|w| w.text().to_owned()).collect();
        Self { words, index }
    }

    /// The word list bundled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a list from a file, one word per line.
    ///
    /// Invalid lines are skipped, so the returned list may be shorter than
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(loader::load_from_file(path)?))
    }

    /// Whether `candidate` is a playable word.
    ///
    /// The candidate is folded to lowercase with Turkish casing rules
    /// before lookup, so `"KAÇAK"` and `"kaçak"` both match.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.index.contains(&alphabet::fold(candidate))
    }

    /// All words of the given length, in list order.
    pub fn of_length(&self, length: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == length)
    }

    /// All words, in list order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Total number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All bundled words should be 4-6 letters, Turkish lowercase
        for &word in WORDS {
            let len = word.chars().count();
            assert!(
                (4..=6).contains(&len),
                "Word '{word}' is not 4-6 letters"
            );
            assert!(
                word.chars().all(alphabet::is_letter),
                "Word '{word}' contains characters outside the alphabet"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let set: FxHashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn embedded_list_builds() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert!(!list.is_empty());
    }

    #[test]
    fn contains_known_words() {
        let list = WordList::embedded();
        assert!(list.contains("kalem"));
        assert!(list.contains("kapak"));
        assert!(list.contains("kaçak"));
        assert!(list.contains("engel"));
    }

    #[test]
    fn contains_folds_case() {
        let list = WordList::embedded();
        assert!(list.contains("KAÇAK"));
        assert!(list.contains("İNCİ"));
        assert!(list.contains("ILIK"));
    }

    #[test]
    fn contains_rejects_unknown() {
        let list = WordList::embedded();
        assert!(!list.contains("zzzzz"));
        assert!(!list.contains(""));
    }

    #[test]
    fn of_length_filters() {
        let list = WordList::embedded();

        assert!(list.of_length(4).count() > 0);
        assert!(list.of_length(5).count() > 0);
        assert!(list.of_length(6).count() > 0);
        assert_eq!(list.of_length(7).count(), 0);
        assert!(list.of_length(5).all(|w| w.len() == 5));
    }

    #[test]
    fn of_length_counts_sum_to_total() {
        let list = WordList::embedded();
        let total: usize = (4..=6).map(|n| list.of_length(n).count()).sum();
        assert_eq!(total, list.len());
    }

    #[test]
    fn every_word_scores_itself_as_a_win() {
        use crate::core::score;

        let list = WordList::embedded();
        for word in list.words() {
            let scored = score(word, word).unwrap();
            assert!(scored.is_win(), "'{word}' should match itself");
        }
    }
}
