use std::collections::{BTreeMap, BTreeSet};

use jiff::{SignedDuration, Timestamp};

use pie_core::models::history::HistoryEntry;
use pie_core::models::note::NoteSummary;
use pie_core::models::patterns::{PatternCount, UsagePatterns};
use pie_core::models::problem::ProblemKey;
use pie_core::models::signal::Severity;
use pie_patterns::PatternTracker;
use pie_patterns::advisories::{AdvisoryInputs, AdvisoryKind, evaluate};
use pie_patterns::config::DecisionSupportConfig;
use pie_patterns::tips::{CLINICAL_TIPS, clinical_tip};
use pie_storage::config::StorageConfig;
use pie_storage::memory::MemoryStore;
use pie_storage::persistence::Persistence;

fn now() -> Timestamp {
    "2026-03-02T15:00:00Z".parse().unwrap()
}

fn days_ago(days: i64) -> Timestamp {
    now() - SignedDuration::from_hours(24 * days)
}

fn entry(problem: ProblemKey, at: Timestamp) -> HistoryEntry {
    let summary = NoteSummary {
        problem,
        intervention_fields: BTreeSet::new(),
        orders_checked: false,
    };
    HistoryEntry::new(&summary, at)
}

fn kinds(
    patterns: &UsagePatterns,
    history: &[HistoryEntry],
    last_order_check: Option<Timestamp>,
) -> Vec<AdvisoryKind> {
    evaluate(
        AdvisoryInputs {
            patterns,
            history,
            last_order_check,
            now: now(),
        },
        &DecisionSupportConfig::default(),
    )
    .into_iter()
    .map(|a| a.kind)
    .collect()
}

#[test]
fn fresh_install_only_asks_for_order_review() {
    let advisories = evaluate(
        AdvisoryInputs {
            patterns: &UsagePatterns::default(),
            history: &[],
            last_order_check: None,
            now: now(),
        },
        &DecisionSupportConfig::default(),
    );
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, AdvisoryKind::MedicalOrderReview);
    assert_eq!(advisories[0].severity, Severity::Warning);
    assert!(CLINICAL_TIPS.contains(&advisories[0].message.as_str()));
}

#[test]
fn order_review_after_thirty_days() {
    let patterns = UsagePatterns::default();
    assert!(kinds(&patterns, &[], Some(days_ago(10))).is_empty());
    assert!(kinds(&patterns, &[], Some(days_ago(30))).is_empty());
    assert_eq!(
        kinds(&patterns, &[], Some(days_ago(31))),
        vec![AdvisoryKind::MedicalOrderReview]
    );
}

#[test]
fn clinical_tip_is_deterministic() {
    assert_eq!(clinical_tip(now()), clinical_tip(now()));
    let next = clinical_tip(now() + SignedDuration::from_secs(1));
    assert_ne!(clinical_tip(now()), next);
}

#[test]
fn completeness_needs_more_than_fifteen_notes() {
    let low_ratio = UsagePatterns {
        total_notes: 16,
        orders_checked_count: 9,
        ..UsagePatterns::default()
    };
    let advisories = evaluate(
        AdvisoryInputs {
            patterns: &low_ratio,
            history: &[],
            last_order_check: Some(now()),
            now: now(),
        },
        &DecisionSupportConfig::default(),
    );
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, AdvisoryKind::DocumentationCompleteness);
    assert!(advisories[0].message.starts_with("Order verification documented in 56% of notes."));

    let too_few = UsagePatterns {
        total_notes: 15,
        ..low_ratio.clone()
    };
    assert!(kinds(&too_few, &[], Some(now())).is_empty());

    let good_ratio = UsagePatterns {
        orders_checked_count: 10,
        ..low_ratio
    };
    assert!(kinds(&good_ratio, &[], Some(now())).is_empty());
}

#[test]
fn frequent_visits_at_eighth_recent_note() {
    let patterns = UsagePatterns::default();
    let mut history: Vec<HistoryEntry> = (0..3)
        .map(|_| entry(ProblemKey::FirstAid, days_ago(8)))
        .collect();
    history.extend((0..7).map(|d| entry(ProblemKey::FirstAid, days_ago(d % 7))));
    assert!(kinds(&patterns, &history, Some(now())).is_empty());

    history.push(entry(ProblemKey::FirstAid, now()));
    let advisories = evaluate(
        AdvisoryInputs {
            patterns: &patterns,
            history: &history,
            last_order_check: Some(now()),
            now: now(),
        },
        &DecisionSupportConfig::default(),
    );
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, AdvisoryKind::FrequentVisits);
    assert!(advisories[0].message.starts_with("8 notes documented in past 7 days."));
}

#[test]
fn diabetes_management_needs_total_and_recent_encounters() {
    let patterns = UsagePatterns {
        total_notes: 5,
        counts_by_problem: BTreeMap::from([(ProblemKey::Diabetes, 5)]),
        orders_checked_count: 5,
        ..UsagePatterns::default()
    };
    let mut history = vec![
        entry(ProblemKey::Diabetes, days_ago(40)),
        entry(ProblemKey::Diabetes, days_ago(35)),
        entry(ProblemKey::Diabetes, days_ago(20)),
        entry(ProblemKey::Diabetes, days_ago(10)),
    ];
    assert!(kinds(&patterns, &history, Some(now())).is_empty());

    history.push(entry(ProblemKey::Diabetes, days_ago(1)));
    assert_eq!(
        kinds(&patterns, &history, Some(now())),
        vec![AdvisoryKind::DiabetesManagement]
    );

    let fewer = UsagePatterns {
        counts_by_problem: BTreeMap::from([(ProblemKey::Diabetes, 4)]),
        ..patterns
    };
    assert!(kinds(&fewer, &history, Some(now())).is_empty());
}

#[test]
fn repeated_pattern_insight_names_the_problem() {
    let pattern = |count| UsagePatterns {
        total_notes: count,
        counts_by_problem: BTreeMap::from([(ProblemKey::Diabetes, count)]),
        orders_checked_count: count,
        repeated_patterns: vec![PatternCount {
            signature: "diabetes-bg-check".to_string(),
            problem: ProblemKey::Diabetes,
            count,
        }],
    };
    assert!(kinds(&pattern(12), &[], Some(now())).is_empty());

    let advisories = evaluate(
        AdvisoryInputs {
            patterns: &pattern(13),
            history: &[],
            last_order_check: Some(now()),
            now: now(),
        },
        &DecisionSupportConfig::default(),
    );
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, AdvisoryKind::DocumentationInsight);
    assert!(
        advisories[0]
            .message
            .starts_with("Similar Diabetes Management documentation pattern used 13 times.")
    );
}

#[test]
fn ferpa_reminder_every_twenty_fifth_note() {
    let mut tracker = PatternTracker::load(
        Persistence::new(MemoryStore::new(), StorageConfig::default()),
        DecisionSupportConfig::default(),
    );
    let note = NoteSummary {
        problem: ProblemKey::Medication,
        intervention_fields: BTreeSet::new(),
        orders_checked: true,
    };

    // Each note is spread a day apart so the frequent-visit rule stays quiet.
    let mut reminders = Vec::new();
    for day in 0..50 {
        let at = now() - SignedDuration::from_hours(24 * (49 - day));
        tracker.record(&note, at);
        if tracker
            .advisories(at)
            .iter()
            .any(|a| a.kind == AdvisoryKind::FerpaReminder)
        {
            reminders.push(tracker.patterns().total_notes);
        }
    }
    assert_eq!(reminders, vec![25, 50]);
}
