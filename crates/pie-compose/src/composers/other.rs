use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};
use pie_core::models::problem::ProblemKey;

use crate::composer::Composer;
use crate::note::NO_PROBLEM_NARRATIVE;

/// Free-form encounters: the nurse's own text, verbatim.
pub struct OtherComposer;

impl Composer for OtherComposer {
    fn key(&self) -> ProblemKey {
        ProblemKey::Other
    }

    fn problem_narrative(&self, state: &EncounterState) -> String {
        state
            .text(Section::Intervention, FieldId::CustomIntervention)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_PROBLEM_NARRATIVE.to_string())
    }

    fn intervention_sentences(&self, state: &EncounterState) -> Vec<String> {
        state
            .text(Section::Intervention, FieldId::CustomIntervention)
            .map(|text| vec![text.to_string()])
            .unwrap_or_default()
    }
}
