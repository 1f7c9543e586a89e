use proptest::prelude::*;

use pie_core::models::field::FieldId;
use pie_core::models::note::NoteSummary;
use pie_core::models::patterns::UsagePatterns;
use pie_core::models::problem::ProblemKey;
use pie_patterns::record_finalized_note;

fn note() -> impl Strategy<Value = NoteSummary> {
    (
        prop::sample::select(ProblemKey::ALL.to_vec()),
        prop::collection::btree_set(prop::sample::select(FieldId::ALL.to_vec()), 0..4),
        any::<bool>(),
    )
        .prop_map(|(problem, fields, orders_checked)| NoteSummary {
            problem,
            intervention_fields: fields,
            orders_checked,
        })
}

proptest! {
    #[test]
    fn counters_stay_consistent(notes in prop::collection::vec(note(), 0..40)) {
        let patterns = notes
            .iter()
            .fold(UsagePatterns::default(), |p, n| record_finalized_note(&p, n));

        prop_assert_eq!(patterns.total_notes, notes.len() as u64);
        prop_assert_eq!(patterns.counts_by_problem.values().sum::<u64>(), patterns.total_notes);
        prop_assert_eq!(
            patterns.repeated_patterns.iter().map(|p| p.count).sum::<u64>(),
            patterns.total_notes
        );
        prop_assert_eq!(
            patterns.orders_checked_count,
            notes.iter().filter(|n| n.orders_checked).count() as u64
        );
        prop_assert!(patterns
            .repeated_patterns
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }
}
