//! Store key conventions.
//!
//! Every persisted document lives under one flat key:
//!
//! ```text
//! pie_usage_patterns     aggregated UsagePatterns
//! pie_note_history       bounded list of HistoryEntry
//! pie_last_order_check   Timestamp of the last note with orders checked
//! pie_auto_save          in-progress Draft
//! ```

pub const USAGE_PATTERNS: &str = "pie_usage_patterns";
pub const NOTE_HISTORY: &str = "pie_note_history";
pub const LAST_ORDER_CHECK: &str = "pie_last_order_check";
pub const AUTO_SAVE: &str = "pie_auto_save";

