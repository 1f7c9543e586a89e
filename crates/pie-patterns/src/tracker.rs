use jiff::Timestamp;
use tracing::debug;

use pie_core::models::history::HistoryEntry;
use pie_core::models::note::NoteSummary;
use pie_core::models::patterns::{PatternCount, UsagePatterns};
use pie_storage::Store;
use pie_storage::persistence::{Persistence, StorageNotice};

use crate::advisories::{self, Advisory, AdvisoryInputs};
use crate::config::DecisionSupportConfig;
use crate::stats::{self, UsageStatistics};

/// Fold one finalized note into the counters.
///
/// The signature list stays sorted by count, highest first. The sort is
/// stable, so equal counts keep their first-seen order and a new signature
/// lands after every existing one with the same count.
pub fn record_finalized_note(patterns: &UsagePatterns, summary: &NoteSummary) -> UsagePatterns {
    let mut next = patterns.clone();
    next.total_notes += 1;
    *next.counts_by_problem.entry(summary.problem).or_insert(0) += 1;
    if summary.orders_checked {
        next.orders_checked_count += 1;
    }

    let signature = summary.signature();
    match next
        .repeated_patterns
        .iter_mut()
        .find(|p| p.signature == signature)
    {
        Some(existing) => existing.count += 1,
        None => next.repeated_patterns.push(PatternCount {
            signature,
            problem: summary.problem,
            count: 1,
        }),
    }
    next.repeated_patterns.sort_by(|a, b| b.count.cmp(&a.count));
    next
}

/// Append `entry`, evicting the oldest entries beyond `max`.
pub fn append_history(history: &[HistoryEntry], entry: HistoryEntry, max: usize) -> Vec<HistoryEntry> {
    let mut next = history.to_vec();
    next.push(entry);
    let excess = next.len().saturating_sub(max);
    next.drain(..excess);
    next
}

/// Usage tracking backed by a store.
///
/// Everything is held in memory as well, so tracking keeps working for the
/// session when the store is unavailable or full.
pub struct PatternTracker<S: Store> {
    persistence: Persistence<S>,
    config: DecisionSupportConfig,
    patterns: UsagePatterns,
    history: Vec<HistoryEntry>,
    last_order_check: Option<Timestamp>,
}

impl<S: Store> PatternTracker<S> {
    pub fn load(mut persistence: Persistence<S>, config: DecisionSupportConfig) -> Self {
        let patterns = persistence.load_patterns();
        let history = persistence.load_history();
        let last_order_check = persistence.load_last_order_check();
        debug!(
            total_notes = patterns.total_notes,
            history = history.len(),
            "usage patterns loaded"
        );
        Self {
            persistence,
            config,
            patterns,
            history,
            last_order_check,
        }
    }

    pub fn patterns(&self) -> &UsagePatterns {
        &self.patterns
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn last_order_check(&self) -> Option<Timestamp> {
        self.last_order_check
    }

    pub fn config(&self) -> &DecisionSupportConfig {
        &self.config
    }

    pub fn persistence(&mut self) -> &mut Persistence<S> {
        &mut self.persistence
    }

    pub fn take_notices(&mut self) -> Vec<StorageNotice> {
        self.persistence.take_notices()
    }

    /// Record a finalized note: history, counters and, when orders were
    /// checked, the order-check time. Returns whether every write reached
    /// the store; the in-memory view is updated either way.
    pub fn record(&mut self, summary: &NoteSummary, now: Timestamp) -> bool {
        let max = self.persistence.config().max_history_notes;
        self.history = append_history(&self.history, HistoryEntry::new(summary, now), max);
        self.patterns = record_finalized_note(&self.patterns, summary);

        let mut persisted = self.persistence.save_history(&self.history);
        persisted &= self.persistence.save_patterns(&self.patterns);
        if summary.orders_checked {
            self.last_order_check = Some(now);
            persisted &= self.persistence.save_last_order_check(now);
        }

        debug!(
            problem = %summary.problem,
            signature = %summary.signature(),
            total_notes = self.patterns.total_notes,
            persisted,
            "finalized note recorded"
        );
        persisted
    }

    pub fn advisories(&self, now: Timestamp) -> Vec<Advisory> {
        advisories::evaluate(
            AdvisoryInputs {
                patterns: &self.patterns,
                history: &self.history,
                last_order_check: self.last_order_check,
                now,
            },
            &self.config,
        )
    }

    pub fn statistics(&self) -> Option<UsageStatistics> {
        stats::usage_statistics(&self.patterns)
    }
}
