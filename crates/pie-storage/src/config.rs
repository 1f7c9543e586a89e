use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Oldest history entries are evicted beyond this.
    pub max_history_notes: usize,
    /// Drafts older than this are discarded on load.
    pub draft_max_age_hours: i64,
    /// Total bytes the file store may hold. `None` is unbounded.
    pub max_bytes: Option<u64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_history_notes: 100,
            draft_max_age_hours: 24,
            max_bytes: None,
        }
    }
}
