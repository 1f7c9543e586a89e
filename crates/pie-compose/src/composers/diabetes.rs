use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, Section};
use pie_core::models::problem::ProblemKey;

use crate::composer::Composer;
use crate::composers::parent_contact_sentence;
use crate::text::{answer, normalize};

pub struct DiabetesComposer;

impl Composer for DiabetesComposer {
    fn key(&self) -> ProblemKey {
        ProblemKey::Diabetes
    }

    fn problem_narrative(&self, state: &EncounterState) -> String {
        let mut opening = "Student with diabetes presented to health office".to_string();
        if let Some(reason) = answer(state, FieldId::VisitReason) {
            opening.push_str(&format!(" for {}", reason.embedded()));
        }

        let mut parts = vec![format!("{opening}.")];

        if let Some(symptoms) = answer(state, FieldId::StudentSymptoms)
            && !symptoms.is("No symptoms")
        {
            parts.push(format!("Student reports {}.", symptoms.embedded()));
        }

        if let Some(bg) = state.text(Section::Intervention, FieldId::BgCheck) {
            let cgm = state.checked(Section::Intervention, FieldId::BgSourceCgm);
            let fingerstick = state.checked(Section::Intervention, FieldId::BgSourceFingerstick);
            parts.push(match (cgm, fingerstick) {
                (true, true) => format!(
                    "Blood glucose measured at {bg} mg/dL via Dexcom sensors and verified \
                     by fingerstick test via glucometer."
                ),
                (true, false) => format!("Blood glucose measured at {bg} mg/dL via Dexcom CGM."),
                (false, true) => {
                    format!("Blood glucose measured at {bg} mg/dL via fingerstick glucometer.")
                }
                (false, false) => format!("Blood glucose check: {bg} mg/dL."),
            });
        }

        if let Some(carbs) = state.text(Section::Intervention, FieldId::CarbsConsumed) {
            parts.push(format!("Carbohydrates consumed: {carbs}g."));
        }

        normalize(&parts.join(" "))
    }

    fn intervention_sentences(&self, state: &EncounterState) -> Vec<String> {
        let mut sentences = Vec::new();

        if let Some(units) = state.text(Section::Intervention, FieldId::InsulinAdmin) {
            let mut sentence = format!("Administered {units} units of insulin");
            // Insulin type keeps its casing: the brand names are proper nouns.
            if let Some(kind) = answer(state, FieldId::InsulinType) {
                sentence.push_str(&format!(" ({})", kind.raw()));
            }
            if let Some(delivery) = answer(state, FieldId::InsulinDelivery) {
                sentence.push_str(&format!(" via {}", delivery.embedded()));
            }
            if let Some(site) = answer(state, FieldId::InjectionSite)
                && !site.is("N/A")
                && !site.is("Via pump")
            {
                sentence.push_str(&format!(" to {}", site.embedded()));
            }
            if let Some(reason) = answer(state, FieldId::InsulinReason) {
                sentence.push_str(&format!(" for {}", reason.embedded()));
            }
            sentences.push(sentence);
        }

        if let Some(snack) = answer(state, FieldId::SnackProvided)
            && !snack.is("None needed")
        {
            sentences.push(format!(
                "Provided {} for hypoglycemia management",
                snack.embedded()
            ));
        }

        if state.checked(Section::Intervention, FieldId::OrdersChecked) {
            sentences.push("Medical orders reviewed and followed".to_string());
        }

        sentences.extend(parent_contact_sentence(state));
        sentences
    }
}
