//! pie-patterns
//!
//! Usage pattern tracking over finalized notes, and the decision-support
//! advisories and statistics derived from it.

pub mod advisories;
pub mod config;
pub mod stats;
pub mod tips;
pub mod tracker;

pub use tracker::{PatternTracker, record_finalized_note};
