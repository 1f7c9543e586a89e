//! pie-cli
//!
//! Command-line front end: configuration file, the interactive confirmation
//! prompt, and the session that threads encounter state through validation,
//! composition and finalization.

pub mod config;
pub mod prompt;
pub mod session;
