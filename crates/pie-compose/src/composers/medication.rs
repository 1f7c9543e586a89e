use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};
use pie_core::models::problem::ProblemKey;

use crate::composer::Composer;
use crate::composers::parent_contact_sentence;
use crate::text::{answer, capitalize_first};

pub struct MedicationComposer;

impl Composer for MedicationComposer {
    fn key(&self) -> ProblemKey {
        ProblemKey::Medication
    }

    fn problem_narrative(&self, state: &EncounterState) -> String {
        let opening = "Student presented for medication administration";
        let Some(name) = state.text(Section::Intervention, FieldId::MedName) else {
            return format!("{opening}.");
        };
        let class = answer(state, FieldId::MedClass)
            .map(|class| format!(" ({})", class.embedded()))
            .unwrap_or_default();

        let Some(reason) = answer(state, FieldId::Reason) else {
            return format!("{opening}. {name} administration{class}.");
        };

        let mut narrative = format!("{opening}. {name} needed for {}{class}", reason.embedded());
        if let Some(prn) = answer(state, FieldId::PrnReason)
            && !prn.is("N/A - Scheduled dose")
        {
            narrative.push_str(&format!(
                ". PRN administration indicated for {}",
                prn.embedded()
            ));
        }
        narrative.push('.');
        narrative
    }

    fn intervention_sentences(&self, state: &EncounterState) -> Vec<String> {
        let mut sentences = Vec::new();

        if let Some(dose) = state.text(Section::Intervention, FieldId::Dose) {
            let mut sentence = format!("Administered dose of {dose}");
            if let Some(unit) = answer(state, FieldId::DoseUnit) {
                sentence.push_str(&format!(" {}", unit.raw()));
            }
            if let Some(route) = answer(state, FieldId::Route) {
                sentence.push_str(&format!(" {}", route.raw()));
            }
            if let Some(since) = answer(state, FieldId::TimeSinceLast)
                && !since.is("Unknown/Not applicable")
            {
                sentence.push_str(&format!(". Time since last dose: {}", since.embedded()));
            }
            sentences.push(sentence);
        }

        let verifications: Vec<&str> = [
            (FieldId::DoseVerification, "dose calculation verified"),
            (FieldId::WitnessedAdmin, "witnessed student take medication"),
            (FieldId::OrdersChecked, "medical orders reviewed and verified"),
        ]
        .into_iter()
        .filter(|(id, _)| state.checked(Section::Intervention, *id))
        .map(|(_, text)| text)
        .collect();
        if !verifications.is_empty() {
            sentences.push(capitalize_first(&verifications.join(", ")));
        }

        sentences.extend(parent_contact_sentence(state));
        sentences
    }
}
