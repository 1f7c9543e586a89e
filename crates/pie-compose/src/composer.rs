use pie_catalog::Problem;
use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};
use pie_core::models::problem::ProblemKey;

use crate::composers;
use crate::text::format_time;

/// Per-category note templates.
pub trait Composer: Send + Sync {
    fn key(&self) -> ProblemKey;

    /// The Problem paragraph. Never empty: each category has its own
    /// fallback sentence.
    fn problem_narrative(&self, state: &EncounterState) -> String;

    /// Intervention sentences in note order, not yet punctuated.
    fn intervention_sentences(&self, state: &EncounterState) -> Vec<String>;

    /// Evaluation parts in note order, not yet punctuated.
    fn evaluation_parts(&self, state: &EncounterState, definition: &dyn Problem) -> Vec<String> {
        let mut parts = Vec::new();

        if state.checked(Section::Evaluation, FieldId::StandardEval)
            && let Some(text) = definition.default_text(FieldId::StandardEval)
        {
            parts.push(text.to_string());
        }

        if state.checked(Section::Evaluation, FieldId::ParentNotified) {
            parts.push(
                match state.text(Section::Evaluation, FieldId::ParentNotifiedTime) {
                    Some(time) => format!("Parent notified at {} via phone", format_time(time)),
                    None => "Parent notified via phone".to_string(),
                },
            );
        }

        if state.checked(Section::Evaluation, FieldId::EmsNotified) {
            parts.push(
                match state.text(Section::Evaluation, FieldId::EmsNotifiedTime) {
                    Some(time) => format!("Emergency Services notified at {}", format_time(time)),
                    None => "Emergency Services notified".to_string(),
                },
            );
        }

        for notes in [FieldId::AdditionalEval, FieldId::CustomEvaluation] {
            if let Some(text) = state.text(Section::Evaluation, notes) {
                parts.push(text.to_string());
            }
        }

        parts
    }
}

/// Look up the composer for a category. Every key has exactly one.
pub fn composer(key: ProblemKey) -> &'static dyn Composer {
    match key {
        ProblemKey::Diabetes => &composers::diabetes::DiabetesComposer,
        ProblemKey::Medication => &composers::medication::MedicationComposer,
        ProblemKey::FirstAid => &composers::first_aid::FirstAidComposer,
        ProblemKey::Other => &composers::other::OtherComposer,
    }
}
