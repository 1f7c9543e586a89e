use pie_core::models::field::FieldId;
use pie_core::models::problem::ProblemKey;

use crate::Problem;
use crate::fields::FieldSpec;

/// Free-form encounter: one intervention and one evaluation text area.
pub struct Other;

impl Problem for Other {
    fn key(&self) -> ProblemKey {
        ProblemKey::Other
    }

    fn name(&self) -> &str {
        "Other"
    }

    fn interventions(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![FieldSpec::textarea(
                FieldId::CustomIntervention,
                "Describe intervention",
                "Intervention provided",
            )]
        });
        &FIELDS
    }

    fn evaluations(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![FieldSpec::textarea(
                FieldId::CustomEvaluation,
                "Describe evaluation",
                "Outcome/evaluation",
            )]
        });
        &FIELDS
    }
}
