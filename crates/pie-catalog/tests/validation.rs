use pie_catalog::Catalog;
use pie_catalog::validation::validate;
use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, FieldValue};
use pie_core::models::problem::ProblemKey;
use pie_core::models::signal::{Severity, SignalKind};

fn diabetes() -> EncounterState {
    EncounterState::new().with_problem(ProblemKey::Diabetes, &Catalog)
}

fn text(value: &str) -> FieldValue {
    FieldValue::text(value)
}

#[test]
fn carbs_in_warning_band_are_kept_with_warning() {
    let result = validate(
        FieldId::CarbsConsumed,
        text("200"),
        &diabetes(),
        &mut |_: &str| -> bool { panic!("no confirmation expected") },
    );
    assert_eq!(result.accepted, Some(text("200")));
    assert!(!result.blocked);
    assert_eq!(result.signals.len(), 1);
    assert_eq!(result.signals[0].severity, Severity::Warning);
    assert_eq!(result.signals[0].kind, SignalKind::HighCarbohydrate);
}

#[test]
fn critical_carbs_denied_leave_field_unset() {
    let result = validate(
        FieldId::CarbsConsumed,
        text("300"),
        &diabetes(),
        &mut |_: &str| false,
    );
    assert_eq!(result.accepted, None);
    assert!(result.blocked);
}

#[test]
fn critical_carbs_acknowledged_are_capped() {
    let mut prompts = Vec::new();
    let result = validate(
        FieldId::CarbsConsumed,
        text("300"),
        &diabetes(),
        &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        },
    );
    assert_eq!(result.accepted, Some(text("250")));
    assert_eq!(result.signals[0].severity, Severity::Critical);
    assert!(result.signals[0].requires_acknowledgment);
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("300g"));
}

#[test]
fn carbs_at_warning_threshold_pass_silently() {
    let result = validate(FieldId::CarbsConsumed, text("150"), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, Some(text("150")));
    assert!(result.signals.is_empty());
}

#[test]
fn critical_insulin_denied_leaves_field_unset() {
    let result = validate(FieldId::InsulinAdmin, text("60"), &diabetes(), &mut |_: &str| false);
    assert_eq!(result.accepted, None);
    assert!(result.blocked);
}

#[test]
fn critical_insulin_acknowledged_keeps_original_value() {
    let result = validate(FieldId::InsulinAdmin, text("60"), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, Some(text("60")));
    assert_eq!(result.signals[0].severity, Severity::Critical);
    assert_eq!(result.signals[0].kind, SignalKind::HighInsulinDose);
}

#[test]
fn insulin_in_warning_band_needs_no_acknowledgment() {
    let result = validate(
        FieldId::InsulinAdmin,
        text("25.5"),
        &diabetes(),
        &mut |_: &str| -> bool { panic!("no confirmation expected") },
    );
    assert_eq!(result.accepted, Some(text("25.5")));
    assert_eq!(result.signals[0].severity, Severity::Warning);
    assert!(!result.signals[0].requires_acknowledgment);
}

#[test]
fn critically_low_glucose_denied_is_cleared() {
    let result = validate(FieldId::BgCheck, text("35"), &diabetes(), &mut |_: &str| false);
    assert_eq!(result.accepted, None);
    assert!(result.blocked);
    assert_eq!(result.signals[0].kind, SignalKind::CriticalHypoglycemia);
}

#[test]
fn critically_high_glucose_denied_is_cleared() {
    let result = validate(FieldId::BgCheck, text("450"), &diabetes(), &mut |_: &str| false);
    assert_eq!(result.accepted, None);
    assert!(result.blocked);
    assert_eq!(result.signals[0].kind, SignalKind::CriticalHyperglycemia);
}

#[test]
fn critical_glucose_acknowledged_is_kept() {
    let result = validate(FieldId::BgCheck, text("35"), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, Some(text("35")));
    assert!(!result.blocked);
    assert!(result.signals[0].requires_acknowledgment);
}

#[test]
fn in_range_glucose_has_no_signal() {
    let result = validate(
        FieldId::BgCheck,
        text("150"),
        &diabetes(),
        &mut |_: &str| -> bool { panic!("no confirmation expected") },
    );
    assert_eq!(result.accepted, Some(text("150")));
    assert!(result.signals.is_empty());
}

#[test]
fn zero_glucose_is_not_critical() {
    let result = validate(FieldId::BgCheck, text("0"), &diabetes(), &mut |_: &str| false);
    assert_eq!(result.accepted, Some(text("0")));
    assert!(result.signals.is_empty());
}

#[test]
fn negative_numbers_are_clamped_to_zero() {
    let result = validate(FieldId::InsulinAdmin, text("-4"), &diabetes(), &mut |_: &str| false);
    assert_eq!(result.accepted, Some(text("0")));
    assert!(result.signals.is_empty());
    assert!(!result.blocked);
}

#[test]
fn signed_zero_is_stored_without_its_sign() {
    for raw in ["-0", "-0.0", "-1e-400"] {
        let result = validate(FieldId::CarbsConsumed, text(raw), &diabetes(), &mut |_: &str| true);
        assert_eq!(result.accepted, Some(text("0")), "input {raw}");
    }
}

#[test]
fn numbers_are_stored_in_plain_decimal_form() {
    let result = validate(FieldId::BgCheck, text("1e2"), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, Some(text("100")));

    let result = validate(FieldId::CarbsConsumed, text(" 045.50 "), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, Some(text("45.5")));
}

#[test]
fn unparseable_numbers_are_left_unset() {
    let result = validate(FieldId::CarbsConsumed, text("lots"), &diabetes(), &mut |_: &str| true);
    assert_eq!(result.accepted, None);
    assert!(!result.blocked);
}

#[test]
fn non_numeric_fields_pass_through() {
    let state = EncounterState::new().with_problem(ProblemKey::Medication, &Catalog);
    let result = validate(FieldId::Dose, text("-5"), &state, &mut |_: &str| false);
    assert_eq!(result.accepted, Some(text("-5")));

    let result = validate(
        FieldId::OrdersChecked,
        FieldValue::Flag(true),
        &state,
        &mut |_: &str| false,
    );
    assert_eq!(result.accepted, Some(FieldValue::Flag(true)));
    assert!(result.signals.is_empty());
}

#[test]
fn numeric_kind_is_found_without_a_selected_problem() {
    let result = validate(
        FieldId::InsulinAdmin,
        text("75"),
        &EncounterState::new(),
        &mut |_: &str| false,
    );
    assert!(result.blocked);
}
