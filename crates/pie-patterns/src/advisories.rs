//! Non-blocking decision-support advisories derived from usage patterns,
//! note history and the last recorded order check.

use jiff::Timestamp;
use serde::Serialize;
use ts_rs::TS;

use pie_core::models::history::HistoryEntry;
use pie_core::models::patterns::UsagePatterns;
use pie_core::models::problem::ProblemKey;
use pie_core::models::signal::Severity;

use crate::config::DecisionSupportConfig;
use crate::stats::rounded_percent;
use crate::tips::clinical_tip;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdvisoryKind {
    MedicalOrderReview,
    DocumentationCompleteness,
    FrequentVisits,
    DiabetesManagement,
    DocumentationInsight,
    FerpaReminder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// What the advisories are computed from.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryInputs<'a> {
    pub patterns: &'a UsagePatterns,
    /// Oldest first.
    pub history: &'a [HistoryEntry],
    pub last_order_check: Option<Timestamp>,
    pub now: Timestamp,
}

/// Every advisory that currently applies, in display order.
pub fn evaluate(inputs: AdvisoryInputs<'_>, config: &DecisionSupportConfig) -> Vec<Advisory> {
    [
        order_review(&inputs, config),
        documentation_completeness(&inputs, config),
        frequent_visits(&inputs, config),
        diabetes_management(&inputs, config),
        documentation_insight(&inputs, config),
        ferpa_reminder(&inputs, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn within_days(entry: &HistoryEntry, now: Timestamp, days: i64) -> bool {
    now.as_millisecond() - entry.timestamp.as_millisecond() < days * DAY_MS
}

fn order_review(inputs: &AdvisoryInputs<'_>, config: &DecisionSupportConfig) -> Option<Advisory> {
    let due = match inputs.last_order_check {
        None => true,
        Some(at) => {
            let days = (inputs.now.as_millisecond() - at.as_millisecond()).div_euclid(DAY_MS);
            days > config.order_check_days
        }
    };
    due.then(|| Advisory {
        kind: AdvisoryKind::MedicalOrderReview,
        severity: Severity::Warning,
        title: "Medical Order Review".to_string(),
        message: clinical_tip(inputs.now).to_string(),
    })
}

fn documentation_completeness(
    inputs: &AdvisoryInputs<'_>,
    config: &DecisionSupportConfig,
) -> Option<Advisory> {
    let patterns = inputs.patterns;
    if patterns.total_notes <= config.completeness_min_notes {
        return None;
    }
    let ratio = patterns.orders_checked_count as f64 / patterns.total_notes as f64;
    (ratio < config.completeness_ratio).then(|| Advisory {
        kind: AdvisoryKind::DocumentationCompleteness,
        severity: Severity::Info,
        title: "Documentation Best Practice".to_string(),
        message: format!(
            "Order verification documented in {}% of notes. Illinois Nurse Practice Act \
             requires following physician orders. Document verification for legal protection.",
            rounded_percent(patterns.orders_checked_count, patterns.total_notes)
        ),
    })
}

fn frequent_visits(
    inputs: &AdvisoryInputs<'_>,
    config: &DecisionSupportConfig,
) -> Option<Advisory> {
    let recent = inputs
        .history
        .iter()
        .filter(|entry| within_days(entry, inputs.now, config.frequent_visit_days))
        .count();
    (recent >= config.frequent_visit_trigger).then(|| Advisory {
        kind: AdvisoryKind::FrequentVisits,
        severity: Severity::Warning,
        title: "Frequent Office Visits".to_string(),
        message: format!(
            "{recent} notes documented in past {} days. Consider: Is care plan needed? Is there \
             a pattern? Document parent communication and any referrals.",
            config.frequent_visit_days
        ),
    })
}

fn diabetes_management(
    inputs: &AdvisoryInputs<'_>,
    config: &DecisionSupportConfig,
) -> Option<Advisory> {
    if inputs.patterns.count_for(ProblemKey::Diabetes) < config.diabetes_min_total {
        return None;
    }
    let recent = inputs
        .history
        .iter()
        .filter(|entry| {
            entry.problem == ProblemKey::Diabetes
                && within_days(entry, inputs.now, config.order_check_days)
        })
        .count();
    (recent >= config.diabetes_recent_count).then(|| Advisory {
        kind: AdvisoryKind::DiabetesManagement,
        severity: Severity::Info,
        title: "Diabetes Management".to_string(),
        message: "Multiple diabetes encounters documented. Reminder: Illinois requires Diabetes \
                  Care Plan on file. Consider: Are BG logs being reviewed? Is parent \
                  communication documented?"
            .to_string(),
    })
}

fn documentation_insight(
    inputs: &AdvisoryInputs<'_>,
    config: &DecisionSupportConfig,
) -> Option<Advisory> {
    let top = inputs.patterns.repeated_patterns.first()?;
    (top.count > config.repeated_pattern_threshold).then(|| Advisory {
        kind: AdvisoryKind::DocumentationInsight,
        severity: Severity::Info,
        title: "Clinical Documentation Insight".to_string(),
        message: format!(
            "Similar {} documentation pattern used {} times. Consider: Are assessments \
             thorough? Does evaluation reflect student-specific response? Varied documentation \
             demonstrates critical thinking.",
            pie_catalog::problem(top.problem).name(),
            top.count
        ),
    })
}

fn ferpa_reminder(inputs: &AdvisoryInputs<'_>, config: &DecisionSupportConfig) -> Option<Advisory> {
    let total = inputs.patterns.total_notes;
    let due = total > 0 && config.ferpa_modulus > 0 && total % config.ferpa_modulus == 0;
    due.then(|| Advisory {
        kind: AdvisoryKind::FerpaReminder,
        severity: Severity::Info,
        title: "FERPA Reminder".to_string(),
        message: "Health records are protected by FERPA and HIPAA. Remember: Store notes \
                  securely, share only with authorized personnel, obtain consent for external \
                  releases. Keep student identifiers private."
            .to_string(),
    })
}
