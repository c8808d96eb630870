//! Terminal output formatting
//!
//! Display utilities for the line-based front end and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_history, print_keyboard};
