//! The degrade boundary between note writing and the store.
//!
//! Loads fall back to defaults and saves report `false` instead of failing;
//! each problem is logged and kept as a [`StorageNotice`] for the UI.

use jiff::Timestamp;
use serde::Serialize;
use serde::de::DeserializeOwned;

use pie_core::models::draft::Draft;
use pie_core::models::encounter::EncounterState;
use pie_core::models::history::HistoryEntry;
use pie_core::models::patterns::UsagePatterns;
use pie_core::store_keys;

use crate::Store;
use crate::config::StorageConfig;
use crate::error::StorageError;

pub const QUOTA_MESSAGE: &str = "Storage full. Consider clearing old notes from the data directory.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Unavailable,
    QuotaExceeded,
    /// Stored data could not be parsed and was replaced by defaults.
    Corrupt,
    Failed,
}

/// A non-fatal persistence problem surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageNotice {
    pub key: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Outcome of reading one key.
enum Loaded<T> {
    Value(T),
    /// Never written, or the store could not be read.
    Absent,
    /// Present but not parseable.
    Corrupt,
}

impl<T> Loaded<T> {
    fn value(self) -> Option<T> {
        match self {
            Loaded::Value(value) => Some(value),
            Loaded::Absent | Loaded::Corrupt => None,
        }
    }
}

pub struct Persistence<S: Store> {
    store: S,
    config: StorageConfig,
    notices: Vec<StorageNotice>,
}

impl<S: Store> Persistence<S> {
    pub fn new(store: S, config: StorageConfig) -> Self {
        Self {
            store,
            config,
            notices: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    pub fn notices(&self) -> &[StorageNotice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<StorageNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn load_patterns(&mut self) -> UsagePatterns {
        self.load(store_keys::USAGE_PATTERNS)
            .value()
            .unwrap_or_default()
    }

    pub fn save_patterns(&mut self, patterns: &UsagePatterns) -> bool {
        self.save(store_keys::USAGE_PATTERNS, patterns)
    }

    /// Oldest first.
    pub fn load_history(&mut self) -> Vec<HistoryEntry> {
        self.load(store_keys::NOTE_HISTORY)
            .value()
            .unwrap_or_default()
    }

    /// Keeps only the newest `max_history_notes` entries.
    pub fn save_history(&mut self, history: &[HistoryEntry]) -> bool {
        let start = history.len().saturating_sub(self.config.max_history_notes);
        self.save(store_keys::NOTE_HISTORY, &history[start..])
    }

    pub fn load_last_order_check(&mut self) -> Option<Timestamp> {
        self.load(store_keys::LAST_ORDER_CHECK).value()
    }

    pub fn save_last_order_check(&mut self, at: Timestamp) -> bool {
        self.save(store_keys::LAST_ORDER_CHECK, &at)
    }

    /// Save `state` as the current draft. A state with nothing entered
    /// clears the draft instead.
    pub fn save_draft(&mut self, state: &EncounterState, now: Timestamp) -> bool {
        if !state.has_data_entered() {
            return self.clear_draft();
        }
        self.save(store_keys::AUTO_SAVE, &Draft::new(state.clone(), now))
    }

    /// The saved draft, unless it is older than `draft_max_age_hours` or
    /// unreadable, in which case it is cleared.
    pub fn load_draft(&mut self, now: Timestamp) -> Option<Draft> {
        let draft: Draft = match self.load(store_keys::AUTO_SAVE) {
            Loaded::Value(draft) => draft,
            Loaded::Absent => return None,
            Loaded::Corrupt => {
                self.clear_draft();
                return None;
            }
        };

        let age_secs = now.as_second().saturating_sub(draft.saved_at.as_second());
        let max_age_secs = self.config.draft_max_age_hours.saturating_mul(3_600);
        if age_secs > max_age_secs {
            tracing::debug!(saved_at = %draft.saved_at, "draft expired, clearing");
            self.clear_draft();
            return None;
        }
        Some(draft)
    }

    pub fn clear_draft(&mut self) -> bool {
        match self.store.remove(store_keys::AUTO_SAVE) {
            Ok(()) => true,
            Err(e) => {
                self.notice(store_keys::AUTO_SAVE, &e);
                false
            }
        }
    }

    /// Store errors and parse failures leave a notice.
    fn load<T: DeserializeOwned>(&mut self, key: &str) -> Loaded<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Loaded::Absent,
            Err(e) => {
                self.notice(key, &e);
                return Loaded::Absent;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "stored value loaded");
                Loaded::Value(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is malformed, using defaults");
                self.notices.push(StorageNotice {
                    key: key.to_string(),
                    kind: NoticeKind::Corrupt,
                    message: format!("Saved data for {key} could not be read and was reset."),
                });
                Loaded::Corrupt
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.store.write(key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                self.notice(key, &e);
                false
            }
        }
    }

    fn notice(&mut self, key: &str, error: &StorageError) {
        let (kind, message) = match error {
            StorageError::Unavailable(_) => (
                NoticeKind::Unavailable,
                "Storage is not available; usage tracking continues for this session only."
                    .to_string(),
            ),
            StorageError::QuotaExceeded { .. } => {
                (NoticeKind::QuotaExceeded, QUOTA_MESSAGE.to_string())
            }
            StorageError::Io(_) | StorageError::Serialization(_) => {
                (NoticeKind::Failed, format!("Storage error for {key}: {error}"))
            }
        };
        tracing::warn!(key, error = %error, "storage operation failed");
        self.notices.push(StorageNotice {
            key: key.to_string(),
            kind,
            message,
        });
    }
}
