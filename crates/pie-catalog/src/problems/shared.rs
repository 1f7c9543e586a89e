//! Fields repeated across the diabetes, medication and first-aid forms.

pub use pie_core::models::field::OTHER_SPECIFY;
use pie_core::models::field::FieldId;

use crate::fields::FieldSpec;

pub const STANDARD_EVALUATION_TEXT: &str =
    "Tolerated well. No adverse effects noted. Student returned to class.";

pub fn parent_contact() -> FieldSpec {
    FieldSpec::select(
        FieldId::ParentContact,
        "Parent/guardian contacted",
        &[
            "Not contacted",
            "Critical BG reading",
            "Hypoglycemia intervention",
            "Hyperglycemia concern",
            "Insulin administration issue",
            "Student request",
            "Medication side effects",
            "Injury requiring follow-up",
            "Illness symptoms",
            OTHER_SPECIFY,
        ],
    )
}

/// Standard evaluation block: default text, parent and EMS notification
/// with time of contact, free-text notes.
pub fn standard_evaluations() -> Vec<FieldSpec> {
    vec![
        FieldSpec::checkbox(FieldId::StandardEval, "Standard evaluation")
            .with_default_text(STANDARD_EVALUATION_TEXT)
            .checked(),
        FieldSpec::checkbox(FieldId::ParentNotified, "Parent notified"),
        FieldSpec::checkbox(FieldId::EmsNotified, "Emergency Services notified"),
        FieldSpec::textarea(
            FieldId::AdditionalEval,
            "Additional evaluation notes",
            "Additional details",
        ),
    ]
}
