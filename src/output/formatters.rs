//! Formatting utilities for terminal output

use crate::core::{LetterStatus, ScoredGuess, alphabet};
use crate::game::{KeyStatus, key_statuses};
use colored::{ColoredString, Colorize};

/// Background color for matched letters, shared with the TUI grid.
pub const GREEN_RGB: (u8, u8, u8) = (0x25, 0x95, 0x2d);
/// Background color for present letters, shared with the TUI grid.
pub const YELLOW_RGB: (u8, u8, u8) = (0xdd, 0xcc, 0x4f);

/// Format a scored guess as an emoji string
#[must_use]
pub fn scored_to_emoji(scored: &ScoredGuess) -> String {
    scored
        .letters()
        .iter()
        .map(|letter| match letter.status {
            LetterStatus::Matched => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Format a scored guess as a row of colored cells
#[must_use]
pub fn scored_row(scored: &ScoredGuess) -> String {
    let cells: Vec<String> = scored
        .letters()
        .iter()
        .map(|letter| cell(letter.ch, letter.status).to_string())
        .collect();
    cells.join(" ")
}

fn cell(ch: char, status: LetterStatus) -> ColoredString {
    let (g, y) = (GREEN_RGB, YELLOW_RGB);
    let text = format!(" {} ", alphabet::upper_char(ch));
    match status {
        LetterStatus::Matched => text.white().bold().on_truecolor(g.0, g.1, g.2),
        LetterStatus::Present => text.black().bold().on_truecolor(y.0, y.1, y.2),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// Format the whole alphabet on one line, colored by what the guess
/// history revealed about each letter
#[must_use]
pub fn keyboard_line(history: &[ScoredGuess]) -> String {
    let statuses = key_statuses(history);
    let (g, y) = (GREEN_RGB, YELLOW_RGB);

    let keys: Vec<String> = alphabet::ALPHABET
        .iter()
        .map(|&ch| {
            let key = ch.to_string();
            let colored = match statuses.get(&ch).copied().unwrap_or_default() {
                KeyStatus::Matched => key.white().bold().on_truecolor(g.0, g.1, g.2),
                KeyStatus::Present => key.black().bold().on_truecolor(y.0, y.1, y.2),
                KeyStatus::Absent => key.bright_black(),
                KeyStatus::Unused => key.normal(),
            };
            colored.to_string()
        })
        .collect();

    keys.join(" ")
}
