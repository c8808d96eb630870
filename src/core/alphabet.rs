//! Turkish alphabet and case folding
//!
//! The 29-letter Turkish alphabet with its locale-specific case rules.
//! Turkish has two distinct i-letters with non-ASCII case mappings:
//! dotted `i` pairs with `İ`, dotless `ı` pairs with `I`. Generic ASCII
//! folding would conflate them, so every comparison in this crate goes
//! through [`fold_char`] instead of ambient locale state.

/// The Turkish alphabet in dictionary order.
///
/// Note the absence of q, w and x, and the presence of ç, ğ, ı, ö, ş, ü.
pub const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Lowercase a single character under Turkish case rules.
///
/// `İ` folds to `i` and `I` folds to `ı`; the other special uppercase
/// letters map to their lowercase pairs; ASCII A–Z fold as usual. Any
/// character without an uppercase mapping is returned unchanged, so the
/// result may still fail [`is_letter`].
///
/// # Examples
/// ```
/// use kelimece::core::alphabet::fold_char;
///
/// assert_eq!(fold_char('İ'), 'i');
/// assert_eq!(fold_char('I'), 'ı');
/// assert_eq!(fold_char('Ş'), 'ş');
/// assert_eq!(fold_char('K'), 'k');
/// assert_eq!(fold_char('a'), 'a');
/// ```
#[must_use]
pub fn fold_char(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        'Ç' => 'ç',
        'Ğ' => 'ğ',
        'Ö' => 'ö',
        'Ş' => 'ş',
        'Ü' => 'ü',
        _ => c.to_ascii_lowercase(),
    }
}

/// Uppercase a single character under Turkish case rules.
///
/// The inverse of [`fold_char`] on alphabet letters; used for display
/// (grid cells and keyboard caps are rendered uppercase).
#[must_use]
pub fn upper_char(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        'ç' => 'Ç',
        'ğ' => 'Ğ',
        'ö' => 'Ö',
        'ş' => 'Ş',
        'ü' => 'Ü',
        _ => c.to_ascii_uppercase(),
    }
}

/// Lowercase a whole string under Turkish case rules.
#[must_use]
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Uppercase a whole string under Turkish case rules.
#[must_use]
pub fn upper(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

/// Check whether an (already folded) character is a Turkish letter.
#[must_use]
pub fn is_letter(c: char) -> bool {
    ALPHABET.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_29_letters() {
        assert_eq!(ALPHABET.len(), 29);
    }

    #[test]
    fn alphabet_excludes_foreign_letters() {
        for c in ['q', 'w', 'x'] {
            assert!(!is_letter(c), "'{c}' is not a Turkish letter");
        }
    }

    #[test]
    fn dotted_i_pairs() {
        // İ/i and I/ı are separate letter pairs.
        assert_eq!(fold_char('İ'), 'i');
        assert_eq!(fold_char('I'), 'ı');
        assert_eq!(upper_char('i'), 'İ');
        assert_eq!(upper_char('ı'), 'I');
    }

    #[test]
    fn i_pairs_are_not_interchangeable() {
        assert_ne!(fold_char('İ'), fold_char('I'));
        assert_ne!(upper_char('i'), upper_char('ı'));
    }

    #[test]
    fn special_letters_fold() {
        assert_eq!(fold_char('Ç'), 'ç');
        assert_eq!(fold_char('Ğ'), 'ğ');
        assert_eq!(fold_char('Ö'), 'ö');
        assert_eq!(fold_char('Ş'), 'ş');
        assert_eq!(fold_char('Ü'), 'ü');
    }

    #[test]
    fn ascii_letters_fold() {
        assert_eq!(fold_char('A'), 'a');
        assert_eq!(fold_char('Z'), 'z');
        assert_eq!(fold_char('k'), 'k');
    }

    #[test]
    fn fold_round_trips_through_upper() {
        for &c in &ALPHABET {
            assert_eq!(fold_char(upper_char(c)), c);
        }
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(fold_char('3'), '3');
        assert_eq!(fold_char(' '), ' ');
        assert_eq!(fold_char('é'), 'é');
        assert!(!is_letter('3'));
        assert!(!is_letter('é'));
    }

    #[test]
    fn fold_string() {
        assert_eq!(fold("KALEM"), "kalem");
        assert_eq!(fold("IŞIK"), "ışık");
        assert_eq!(fold("İĞDE"), "iğde");
        assert_eq!(fold("ÇİÇEK"), "çiçek");
    }

    #[test]
    fn upper_string() {
        assert_eq!(upper("kalem"), "KALEM");
        assert_eq!(upper("ışık"), "IŞIK");
        assert_eq!(upper("iğde"), "İĞDE");
        assert_eq!(upper("şoför"), "ŞOFÖR");
    }

    #[test]
    fn fold_is_idempotent() {
        for &c in &ALPHABET {
            assert_eq!(fold_char(c), c);
        }
    }
}
