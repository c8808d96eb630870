//! Kelimece
//!
//! A daily Turkish word-guessing game for the terminal, with proper
//! Turkish case folding, a deterministic word of the day, and resumable
//! sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use kelimece::core::{Word, score};
//!
//! // Score a guess against a target
//! let guess = Word::new("kapak").unwrap();
//! let target = Word::new("kaçak").unwrap();
//!
//! let scored = score(&guess, &target).unwrap();
//! assert!(!scored.is_win());
//! ```

// Core domain types
pub mod core;

// Game orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
