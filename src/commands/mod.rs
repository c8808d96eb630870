//! Command implementations

pub mod check;
pub mod reveal;
pub mod simple;

pub use check::run_check;
pub use reveal::run_reveal;
pub use simple::run_simple;
