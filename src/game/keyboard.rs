//! On-screen keyboard status projection
//!
//! Derives per-letter knowledge from the scored-guess history so front
//! ends can color their keyboards. The projection is recomputed from the
//! history on demand and never stored in the session.

use crate::core::{LetterStatus, ScoredGuess};
use rustc_hash::FxHashMap;

/// Best information known about a letter across all guesses.
///
/// Variants are ordered so that a letter's status only ever upgrades:
/// `Absent` never overrides `Present`, and nothing overrides `Matched`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyStatus {
    /// The letter has not appeared in any guess
    #[default]
    Unused,
    /// Every occurrence so far was absent from the target
    Absent,
    /// The letter is in the target, position not yet pinned down
    Present,
    /// The letter was matched at its exact position at least once
    Matched,
}

impl KeyStatus {
    fn from_letter(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Matched => Self::Matched,
            LetterStatus::Present => Self::Present,
            LetterStatus::Absent => Self::Absent,
        }
    }
}

/// Fold the guess history into a per-letter status map.
///
/// Letters that never appeared in a guess have no entry; callers treat
/// missing entries as [`KeyStatus::Unused`].
#[must_use]
pub fn key_statuses(history: &[ScoredGuess]) -> FxHashMap<char, KeyStatus> {
    let mut map = FxHashMap::default();

    for scored in history {
        for letter in scored.letters() {
            let status = KeyStatus::from_letter(letter.status);
            let entry = map.entry(letter.ch).or_insert(KeyStatus::Unused);
            if status > *entry {
                *entry = status;
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn scored(guess: &str, target: &str) -> ScoredGuess {
        score(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn empty_history_has_no_entries() {
        let map = key_statuses(&[]);
        assert!(map.is_empty());
    }

    #[test]
    fn single_guess_maps_each_letter() {
        // kapak vs kalem: k and a match, p is absent
        let map = key_statuses(&[scored("kapak", "kalem")]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&'k'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'a'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'p'), Some(&KeyStatus::Absent));
        assert_eq!(map.get(&'z'), None);
    }

    #[test]
    fn repeated_letter_takes_best_status() {
        // engel vs kalem: the first e is absent, the second e matches
        let map = key_statuses(&[scored("engel", "kalem")]);

        assert_eq!(map.get(&'e'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'l'), Some(&KeyStatus::Present));
        assert_eq!(map.get(&'n'), Some(&KeyStatus::Absent));
        assert_eq!(map.get(&'g'), Some(&KeyStatus::Absent));
    }

    #[test]
    fn later_guesses_upgrade_but_never_downgrade() {
        let history = [scored("saray", "araba"), scored("araba", "araba")];
        let map = key_statuses(&history);

        // a and r were present after the first guess, matched after the second
        assert_eq!(map.get(&'a'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'r'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'b'), Some(&KeyStatus::Matched));
        assert_eq!(map.get(&'s'), Some(&KeyStatus::Absent));
        assert_eq!(map.get(&'y'), Some(&KeyStatus::Absent));
    }

    #[test]
    fn status_ordering_matches_precedence() {
        assert!(KeyStatus::Matched > KeyStatus::Present);
        assert!(KeyStatus::Present > KeyStatus::Absent);
        assert!(KeyStatus::Absent > KeyStatus::Unused);
    }
}
