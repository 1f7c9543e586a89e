//! pie-compose
//!
//! Narrative composer: turns an encounter state into PIE note text. Every
//! function here is pure: the same state always yields the same note.

pub mod composer;
pub mod composers;
pub mod note;
pub mod text;

pub use note::{NoteSections, compose, compose_sections};
