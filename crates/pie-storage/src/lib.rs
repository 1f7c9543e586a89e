//! pie-storage
//!
//! Local JSON persistence for usage patterns, note history, the last order
//! check and the auto-saved draft. Every failure degrades to defaults plus a
//! [`persistence::StorageNotice`]; nothing here is fatal to note writing.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod persistence;
pub mod time;

use error::StorageError;

/// A string key-value store with the failure modes of browser local storage.
pub trait Store {
    /// Whether reads and writes can currently succeed.
    fn is_available(&self) -> bool;

    /// `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
