//! pie-core
//!
//! Pure domain types for PIE note documentation. No I/O; this is the shared
//! vocabulary of the catalog, composer, pattern tracker and storage crates.

pub mod error;
pub mod models;
pub mod store_keys;
