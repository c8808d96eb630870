//! Core domain types
//!
//! The alphabet, word and scoring primitives the rest of the crate builds
//! on. Everything here is pure: no I/O, no clocks, no hidden state.

pub mod alphabet;
mod scoring;
mod word;

pub use scoring::{LetterStatus, ScoreError, ScoredGuess, ScoredLetter, score};
pub use word::{Word, WordError};
