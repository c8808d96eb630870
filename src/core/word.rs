//! Dictionary word representation
//!
//! A Word stores a lowercase Turkish word along with its character sequence
//! for positional access. Turkish letters are multi-byte in UTF-8, so the
//! chars are kept separately and byte indexing is never used.

use super::alphabet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A lowercase Turkish word of any length.
///
/// Input is normalized through the Turkish folding table at construction,
/// so `KALEM`, `Kalem` and `kalem` are the same word. Serializes as its
/// plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word contains '{c}', which is not a Turkish letter")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the input is empty or contains a character
    /// outside the Turkish alphabet after folding.
    ///
    /// # Examples
    /// ```
    /// use kelimece::core::Word;
    ///
    /// let word = Word::new("KALEM").unwrap();
    /// assert_eq!(word.text(), "kalem");
    ///
    /// // İ folds to dotted i, I folds to dotless ı
    /// assert_eq!(Word::new("İĞDE").unwrap().text(), "iğde");
    /// assert_eq!(Word::new("IŞIK").unwrap().text(), "ışık");
    ///
    /// assert!(Word::new("w1ld").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let chars: Vec<char> = text.chars().map(alphabet::fold_char).collect();

        if chars.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(&bad) = chars.iter().find(|c| !alphabet::is_letter(**c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let text: String = chars.iter().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the word has no letters; never true for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("kalem").unwrap();
        assert_eq!(word.text(), "kalem");
        assert_eq!(word.chars(), &['k', 'a', 'l', 'e', 'm']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("KALEM").unwrap();
        assert_eq!(word.text(), "kalem");

        let word2 = Word::new("KaLeM").unwrap();
        assert_eq!(word2.text(), "kalem");
    }

    #[test]
    fn word_creation_turkish_letters() {
        let word = Word::new("çiçek").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(0), 'ç');

        let word = Word::new("yoğurt").unwrap();
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_turkish_uppercase_i() {
        // Uppercase dotted İ becomes dotted i, uppercase I becomes dotless ı.
        assert_eq!(Word::new("İNCİ").unwrap().text(), "inci");
        assert_eq!(Word::new("ILIK").unwrap().text(), "ılık");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("kal3m"),
            Err(WordError::InvalidCharacter('3'))
        ));
        assert!(matches!(
            Word::new("waffle"),
            Err(WordError::InvalidCharacter('w'))
        ));
        assert!(Word::new("ka lem").is_err());
    }

    #[test]
    fn word_char_count_not_byte_count() {
        // "çiçek" is 5 letters but 7 bytes in UTF-8.
        let word = Word::new("çiçek").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.text().len(), 7);
    }

    #[test]
    fn word_display() {
        let word = Word::new("kalem").unwrap();
        assert_eq!(format!("{word}"), "kalem");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("kalem").unwrap();
        let word2 = Word::new("KALEM").unwrap();
        let word3 = Word::new("kapak").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_serde_round_trip() {
        let word = Word::new("şoför").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"şoför\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn word_serde_rejects_invalid() {
        let result: Result<Word, _> = serde_json::from_str("\"qqqqq\"");
        assert!(result.is_err());
    }
}
