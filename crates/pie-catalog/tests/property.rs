//! Property-based tests for the input safety rules.

use pie_catalog::Catalog;
use pie_catalog::validation::validate;
use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, FieldValue};
use pie_core::models::problem::ProblemKey;
use proptest::prelude::*;

fn numeric_field(n: u8) -> FieldId {
    match n % 3 {
        0 => FieldId::BgCheck,
        1 => FieldId::CarbsConsumed,
        _ => FieldId::InsulinAdmin,
    }
}

/// Formatted floats plus hand-typed forms: signs, leading zeros, exponents.
fn numeric_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1_000.0f64..1_000.0).prop_map(|value| value.to_string()),
        "[+-]?[0-9]{1,4}(\\.[0-9]{0,3})?([eE][+-]?[0-9]{1,3})?",
        Just("-0".to_string()),
        Just("-0.0".to_string()),
    ]
}

proptest! {
    /// Whatever the input and whatever the acknowledgment, an accepted
    /// numeric value is never negative.
    #[test]
    fn prop_accepted_numbers_are_never_negative(
        raw in numeric_input(),
        field in any::<u8>(),
        acknowledge in any::<bool>(),
    ) {
        let state = EncounterState::new().with_problem(ProblemKey::Diabetes, &Catalog);
        let result = validate(
            numeric_field(field),
            FieldValue::Text(raw),
            &state,
            &mut |_: &str| acknowledge,
        );
        if let Some(FieldValue::Text(text)) = result.accepted {
            prop_assert!(!text.starts_with('-'), "accepted {text}");
            prop_assert!(!text.contains(['e', 'E']), "accepted {text}");
            let accepted: f64 = text.parse().unwrap();
            prop_assert!(accepted >= 0.0);
        }
    }

    /// Acknowledged carbohydrate values never exceed the critical threshold.
    #[test]
    fn prop_carbs_never_exceed_cap(value in 0.0f64..10_000.0) {
        let state = EncounterState::new().with_problem(ProblemKey::Diabetes, &Catalog);
        let result = validate(
            FieldId::CarbsConsumed,
            FieldValue::Text(value.to_string()),
            &state,
            &mut |_: &str| true,
        );
        let Some(FieldValue::Text(text)) = result.accepted else {
            panic!("acknowledged carbs must be accepted");
        };
        let accepted: f64 = text.parse().unwrap();
        prop_assert!(accepted <= 250.0);
    }

    /// Blocking only ever happens through a denied acknowledgment.
    #[test]
    fn prop_acknowledged_input_is_never_blocked(value in -500.0f64..2_000.0, field in any::<u8>()) {
        let state = EncounterState::new().with_problem(ProblemKey::Diabetes, &Catalog);
        let result = validate(
            numeric_field(field),
            FieldValue::Text(value.to_string()),
            &state,
            &mut |_: &str| true,
        );
        prop_assert!(!result.blocked);
        prop_assert!(result.accepted.is_some());
    }
}
