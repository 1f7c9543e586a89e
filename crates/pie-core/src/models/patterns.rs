use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::problem::ProblemKey;

/// Aggregated counters over every finalized note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UsagePatterns {
    pub total_notes: u64,
    pub counts_by_problem: BTreeMap<ProblemKey, u64>,
    pub orders_checked_count: u64,
    /// Sorted by `count`, highest first.
    pub repeated_patterns: Vec<PatternCount>,
}

impl UsagePatterns {
    pub fn count_for(&self, problem: ProblemKey) -> u64 {
        self.counts_by_problem.get(&problem).copied().unwrap_or(0)
    }
}

/// How often one fieldset signature has been documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternCount {
    pub signature: String,
    pub problem: ProblemKey,
    pub count: u64,
}
