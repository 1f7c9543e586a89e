use pie_core::models::field::FieldId;
use pie_core::models::problem::ProblemKey;

use crate::Problem;
use crate::fields::FieldSpec;
use crate::problems::shared::{self, OTHER_SPECIFY};

/// Medication administration, scheduled or PRN. Dose unit and route are
/// enumerated rather than free text.
pub struct Medication;

impl Problem for Medication {
    fn key(&self) -> ProblemKey {
        ProblemKey::Medication
    }

    fn name(&self) -> &str {
        "Medication Administration"
    }

    fn interventions(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                FieldSpec::text(FieldId::MedName, "Medication name", "Medication"),
                FieldSpec::select(
                    FieldId::MedClass,
                    "Medication class",
                    &[
                        "Stimulant (ADHD)",
                        "Non-stimulant (ADHD)",
                        "Antibiotic",
                        "Bronchodilator/Inhaled steroid",
                        "Antihistamine",
                        "Antiepileptic/Anticonvulsant",
                        "Analgesic (pain)",
                        "Antiemetic/GI medication",
                        "Antidepressant",
                        "Antianxiety",
                        "Antipsychotic",
                        "Emergency epinephrine",
                        "Antiinflammatory (NSAID)",
                        "Antacid/Reflux medication",
                        "Other",
                    ],
                ),
                FieldSpec::text(FieldId::Dose, "Dose administered", "Amount"),
                FieldSpec::select(
                    FieldId::DoseUnit,
                    "Dose unit",
                    &[
                        "mg", "mcg", "mL", "g", "units", "puffs", "sprays", "tablets", "capsules",
                    ],
                ),
                FieldSpec::select(
                    FieldId::Route,
                    "Route",
                    &[
                        "PO (by mouth)",
                        "Inhaled",
                        "Topical",
                        "Sublingual",
                        "Subcutaneous",
                        "Nasal",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::Reason,
                    "Reason for medication",
                    &[
                        "ADHD symptom management",
                        "Seizure prevention",
                        "Asthma/breathing support",
                        "Allergy symptoms",
                        "Pain relief",
                        "Infection treatment",
                        "Nausea/GI symptoms",
                        "Anxiety management",
                        "Blood pressure control",
                        "Diabetes management",
                        "Per medical orders",
                        OTHER_SPECIFY,
                    ],
                ),
                FieldSpec::select(
                    FieldId::PrnReason,
                    "PRN reason (if applicable)",
                    &[
                        "N/A - Scheduled dose",
                        "Pain",
                        "Fever",
                        "Asthma symptoms/wheezing",
                        "Anxiety",
                        "Nausea",
                        "Allergic reaction",
                        "Breakthrough symptoms",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::TimeSinceLast,
                    "Time since last dose",
                    &[
                        "Unknown/Not applicable",
                        "Less than 2 hours",
                        "2-4 hours",
                        "4-6 hours",
                        "6-8 hours",
                        "8-12 hours",
                        "More than 12 hours",
                        "First dose of day",
                    ],
                ),
                FieldSpec::checkbox(FieldId::DoseVerification, "Dose calculation verified"),
                FieldSpec::checkbox(FieldId::WitnessedAdmin, "Witnessed student take medication"),
                FieldSpec::checkbox(FieldId::OrdersChecked, "Medical orders reviewed and verified"),
                shared::parent_contact(),
            ]
        });
        &FIELDS
    }

    fn evaluations(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> =
            std::sync::LazyLock::new(shared::standard_evaluations);
        &FIELDS
    }
}
