use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};
use pie_core::models::problem::ProblemKey;

use crate::composer::Composer;
use crate::composers::parent_contact_sentence;
use crate::text::{answer, capitalize_first};

pub struct FirstAidComposer;

impl Composer for FirstAidComposer {
    fn key(&self) -> ProblemKey {
        ProblemKey::FirstAid
    }

    fn problem_narrative(&self, state: &EncounterState) -> String {
        let mut narrative = "Student presented to health office".to_string();

        match (
            answer(state, FieldId::InjuryType),
            answer(state, FieldId::Location),
        ) {
            (Some(injury), Some(location)) => narrative.push_str(&format!(
                " with {} to {}",
                injury.embedded(),
                location.embedded()
            )),
            (Some(injury), None) => narrative.push_str(&format!(" with {}", injury.embedded())),
            (None, _) => narrative.push_str(" with minor injury/discomfort"),
        }

        if let Some(occurred) = answer(state, FieldId::InjuryOccurred) {
            narrative.push_str(&format!(" sustained during {}", occurred.embedded()));
        }
        if let Some(mechanism) = answer(state, FieldId::InjuryMechanism)
            && !mechanism.is("Other")
        {
            narrative.push_str(&format!(" from {}", mechanism.embedded()));
        }
        narrative.push('.');

        if let Some(assessment) = answer(state, FieldId::InitialAssessment) {
            narrative.push_str(&format!(" Initial assessment: {}.", assessment.embedded()));
        }
        narrative
    }

    fn intervention_sentences(&self, state: &EncounterState) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut treatments = Vec::new();

        let ice_duration = answer(state, FieldId::IceDuration).filter(|d| !d.is("N/A"));
        match ice_duration {
            Some(duration) => {
                treatments.push(format!("applied ice pack for {}", duration.embedded()))
            }
            None if state.checked(Section::Intervention, FieldId::IceApplied) => {
                treatments.push("applied ice pack".to_string())
            }
            None => {}
        }
        if let Some(wound_care) = answer(state, FieldId::WoundCare)
            && !wound_care.is("N/A")
        {
            treatments.push(wound_care.embedded());
        }
        if state.checked(Section::Intervention, FieldId::BandaidApplied) {
            treatments.push("applied bandage/dressing".to_string());
        }
        if !treatments.is_empty() {
            sentences.push(capitalize_first(&treatments.join(", then ")));
        }

        if let Some(rest) = answer(state, FieldId::RestProvided)
            && !rest.is("N/A")
        {
            sentences.push(format!("Provided {} of rest", rest.embedded()));
        }

        if let Some(vitals) = state.text(Section::Intervention, FieldId::VitalSigns) {
            sentences.push(format!("Vital signs assessed: {vitals}"));
        }

        if let Some(screen) = answer(state, FieldId::HeadInjuryScreen)
            && !screen.is("N/A - Not head injury")
        {
            sentences.push(format!(
                "Head injury screening performed: {}",
                screen.embedded()
            ));
        }

        if let Some(status) = answer(state, FieldId::ReturnToActivity) {
            sentences.push(status.raw().to_string());
        }

        sentences.extend(parent_contact_sentence(state));
        sentences
    }
}
