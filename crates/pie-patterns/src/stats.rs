use serde::Serialize;
use ts_rs::TS;

use pie_core::models::patterns::UsagePatterns;
use pie_core::models::problem::ProblemKey;

pub const NO_DATA_MESSAGE: &str = "Pattern tracking will appear after you create a few notes.";

/// Summary shown in the statistics panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct UsageStatistics {
    pub total_notes: u64,
    /// Most common first.
    pub problems: Vec<ProblemShare>,
    pub orders_verification_percent: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ProblemShare {
    pub problem: ProblemKey,
    pub name: String,
    pub count: u64,
    pub percent: u64,
}

/// `part / total` as a whole percentage, halves rounded up. Zero when
/// `total` is zero.
pub fn rounded_percent(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0 + 0.5).floor() as u64
}

/// `None` until at least one note has been recorded.
pub fn usage_statistics(patterns: &UsagePatterns) -> Option<UsageStatistics> {
    if patterns.total_notes == 0 {
        return None;
    }

    let mut problems: Vec<ProblemShare> = patterns
        .counts_by_problem
        .iter()
        .map(|(&problem, &count)| ProblemShare {
            problem,
            name: pie_catalog::problem(problem).name().to_string(),
            count,
            percent: rounded_percent(count, patterns.total_notes),
        })
        .collect();
    problems.sort_by(|a, b| b.count.cmp(&a.count));

    Some(UsageStatistics {
        total_notes: patterns.total_notes,
        problems,
        orders_verification_percent: rounded_percent(
            patterns.orders_checked_count,
            patterns.total_notes,
        ),
    })
}
