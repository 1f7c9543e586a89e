use std::collections::BTreeSet;

use pie_core::error::CoreError;
use pie_core::models::encounter::{EncounterState, FieldCatalog};
use pie_core::models::field::{FieldId, FieldValue, Section};
use pie_core::models::note::NoteSummary;
use pie_core::models::patterns::UsagePatterns;
use pie_core::models::problem::ProblemKey;

/// Accepts everything for every problem and pre-checks the standard evaluation.
struct OpenCatalog;

impl FieldCatalog for OpenCatalog {
    fn accepts(&self, _problem: ProblemKey, _section: Section, _field: FieldId) -> bool {
        true
    }

    fn initial_values(&self, _problem: ProblemKey) -> Vec<(Section, FieldId, FieldValue)> {
        vec![(Section::Evaluation, FieldId::StandardEval, FieldValue::Flag(true))]
    }
}

/// Only knows `bg-check` for diabetes.
struct NarrowCatalog;

impl FieldCatalog for NarrowCatalog {
    fn accepts(&self, problem: ProblemKey, section: Section, field: FieldId) -> bool {
        problem == ProblemKey::Diabetes
            && section == Section::Intervention
            && field == FieldId::BgCheck
    }

    fn initial_values(&self, _problem: ProblemKey) -> Vec<(Section, FieldId, FieldValue)> {
        Vec::new()
    }
}

#[test]
fn field_ids_serialize_to_their_form_ids() {
    for id in FieldId::ALL {
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        assert_eq!(id.as_str().parse::<FieldId>().unwrap(), id);
    }
}

#[test]
fn problem_keys_use_kebab_case() {
    assert_eq!(
        serde_json::to_string(&ProblemKey::FirstAid).unwrap(),
        "\"first-aid\""
    );
    assert_eq!("first-aid".parse::<ProblemKey>().unwrap(), ProblemKey::FirstAid);
    assert!(matches!(
        "dental".parse::<ProblemKey>(),
        Err(CoreError::UnknownProblem(_))
    ));
}

#[test]
fn unknown_field_id_is_rejected() {
    assert!(matches!(
        "blood-pressure".parse::<FieldId>(),
        Err(CoreError::UnknownField(_))
    ));
}

#[test]
fn companions_are_declared_for_specify_and_time_fields() {
    assert_eq!(
        FieldId::ParentContact.other_companion(),
        Some(FieldId::ParentContactOther)
    );
    assert_eq!(FieldId::Location.other_companion(), Some(FieldId::LocationOther));
    assert_eq!(FieldId::IceDuration.other_companion(), None);
    assert_eq!(
        FieldId::EmsNotified.time_companion(),
        Some(FieldId::EmsNotifiedTime)
    );
}

#[test]
fn field_value_set_semantics() {
    assert!(FieldValue::Flag(true).is_set());
    assert!(!FieldValue::Flag(false).is_set());
    assert!(!FieldValue::text("").is_set());
    assert_eq!(FieldValue::text("55").as_text(), Some("55"));
    assert_eq!(FieldValue::text("").as_text(), None);
}

#[test]
fn field_values_deserialize_untagged() {
    let flag: FieldValue = serde_json::from_str("true").unwrap();
    let text: FieldValue = serde_json::from_str("\"Insulin pen\"").unwrap();
    assert_eq!(flag, FieldValue::Flag(true));
    assert_eq!(text, FieldValue::text("Insulin pen"));
}

#[test]
fn new_state_is_empty_with_prefix_enabled() {
    let state = EncounterState::new();
    assert_eq!(state.problem(), None);
    assert!(state.use_structured_prefix());
    assert!(!state.has_data_entered());
}

#[test]
fn setting_a_value_without_problem_fails() {
    let state = EncounterState::new();
    let result = state.with_value(
        &OpenCatalog,
        Section::Intervention,
        FieldId::BgCheck,
        Some(FieldValue::text("120")),
    );
    assert!(matches!(result, Err(CoreError::NoProblemSelected)));
}

#[test]
fn fields_outside_the_problem_are_rejected() {
    let state = EncounterState::new().with_problem(ProblemKey::Diabetes, &NarrowCatalog);
    let result = state.with_value(
        &NarrowCatalog,
        Section::Intervention,
        FieldId::MedName,
        Some(FieldValue::text("Ibuprofen")),
    );
    assert!(matches!(
        result,
        Err(CoreError::FieldNotInProblem {
            field: FieldId::MedName,
            ..
        })
    ));
}

#[test]
fn updates_return_a_new_state() {
    let base = EncounterState::new().with_problem(ProblemKey::Diabetes, &NarrowCatalog);
    let next = base
        .with_value(
            &NarrowCatalog,
            Section::Intervention,
            FieldId::BgCheck,
            Some(FieldValue::text("120")),
        )
        .unwrap();

    assert_eq!(base.text(Section::Intervention, FieldId::BgCheck), None);
    assert_eq!(next.text(Section::Intervention, FieldId::BgCheck), Some("120"));

    let cleared = next
        .with_value(&NarrowCatalog, Section::Intervention, FieldId::BgCheck, None)
        .unwrap();
    assert!(cleared.interventions().is_empty());
}

#[test]
fn switching_problem_clears_answers_and_applies_initial_values() {
    let state = EncounterState::new()
        .with_problem(ProblemKey::Diabetes, &OpenCatalog)
        .with_value(
            &OpenCatalog,
            Section::Intervention,
            FieldId::BgCheck,
            Some(FieldValue::text("120")),
        )
        .unwrap()
        .with_structured_prefix(false);

    let switched = state.with_problem(ProblemKey::FirstAid, &OpenCatalog);
    assert_eq!(switched.problem(), Some(ProblemKey::FirstAid));
    assert!(switched.interventions().is_empty());
    assert!(switched.checked(Section::Evaluation, FieldId::StandardEval));
    assert!(!switched.use_structured_prefix());
}

#[test]
fn unchecking_a_notification_clears_its_time() {
    let state = EncounterState::new()
        .with_problem(ProblemKey::FirstAid, &OpenCatalog)
        .with_value(
            &OpenCatalog,
            Section::Evaluation,
            FieldId::ParentNotified,
            Some(FieldValue::Flag(true)),
        )
        .unwrap()
        .with_value(
            &OpenCatalog,
            Section::Evaluation,
            FieldId::ParentNotifiedTime,
            Some(FieldValue::text("10:30")),
        )
        .unwrap();

    let unchecked = state
        .with_value(
            &OpenCatalog,
            Section::Evaluation,
            FieldId::ParentNotified,
            Some(FieldValue::Flag(false)),
        )
        .unwrap();
    assert_eq!(
        unchecked.value(Section::Evaluation, FieldId::ParentNotifiedTime),
        None
    );
}

#[test]
fn leaving_other_specify_clears_the_companion_text() {
    let parent_contact = |state: &EncounterState, value: &str| {
        state
            .with_value(
                &OpenCatalog,
                Section::Evaluation,
                FieldId::ParentContact,
                Some(FieldValue::text(value)),
            )
            .unwrap()
    };
    let state = EncounterState::new().with_problem(ProblemKey::FirstAid, &OpenCatalog);
    let specified = parent_contact(&state, "Other (specify)")
        .with_value(
            &OpenCatalog,
            Section::Evaluation,
            FieldId::ParentContactOther,
            Some(FieldValue::text("Field trip permission")),
        )
        .unwrap();

    let still_other = parent_contact(&specified, "Other (specify)");
    assert_eq!(
        still_other.text(Section::Evaluation, FieldId::ParentContactOther),
        Some("Field trip permission")
    );

    let switched = parent_contact(&specified, "Student request");
    assert_eq!(
        switched.value(Section::Evaluation, FieldId::ParentContactOther),
        None
    );
}

#[test]
fn sanitized_drops_foreign_answers() {
    let json = r#"{
        "problem": "diabetes",
        "interventions": { "bg-check": "120", "med-name": "Ibuprofen" },
        "evaluation": {}
    }"#;
    let state: EncounterState = serde_json::from_str(json).unwrap();
    assert!(state.use_structured_prefix());

    let clean = state.sanitized(&NarrowCatalog);
    assert_eq!(clean.interventions().len(), 1);
    assert_eq!(clean.text(Section::Intervention, FieldId::BgCheck), Some("120"));
}

#[test]
fn signature_sorts_ids_lexically() {
    let summary = NoteSummary {
        problem: ProblemKey::Diabetes,
        intervention_fields: BTreeSet::from([
            FieldId::OrdersChecked,
            FieldId::BgCheck,
            FieldId::CarbsConsumed,
        ]),
        orders_checked: true,
    };
    assert_eq!(
        summary.signature(),
        "diabetes-bg-check,carbs-consumed,orders-checked"
    );
}

#[test]
fn summary_requires_a_problem() {
    assert_eq!(NoteSummary::from_state(&EncounterState::new()), None);

    let state = EncounterState::new()
        .with_problem(ProblemKey::Medication, &OpenCatalog)
        .with_value(
            &OpenCatalog,
            Section::Intervention,
            FieldId::OrdersChecked,
            Some(FieldValue::Flag(true)),
        )
        .unwrap();
    let summary = NoteSummary::from_state(&state).unwrap();
    assert_eq!(summary.problem, ProblemKey::Medication);
    assert!(summary.orders_checked);
    assert_eq!(summary.intervention_fields.len(), 1);
}

#[test]
fn malformed_pattern_fields_fall_back_to_defaults() {
    let patterns: UsagePatterns = serde_json::from_str(r#"{"total_notes": 4}"#).unwrap();
    assert_eq!(patterns.total_notes, 4);
    assert!(patterns.repeated_patterns.is_empty());
    assert_eq!(patterns.count_for(ProblemKey::Other), 0);
}
