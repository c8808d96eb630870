//! Interactive TUI mode
//!
//! Full-screen daily game built on ratatui.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
