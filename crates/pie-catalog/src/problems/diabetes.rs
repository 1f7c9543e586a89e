use pie_core::models::field::FieldId;
use pie_core::models::problem::ProblemKey;

use crate::Problem;
use crate::fields::{FieldSpec, InputConstraints};
use crate::problems::shared::{self, OTHER_SPECIFY};

/// Diabetes management: glucose check, carbohydrate count, insulin
/// administration and hypoglycemia treatment.
pub struct Diabetes;

impl Problem for Diabetes {
    fn key(&self) -> ProblemKey {
        ProblemKey::Diabetes
    }

    fn name(&self) -> &str {
        "Diabetes Management"
    }

    fn interventions(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            vec![
                FieldSpec::select(
                    FieldId::VisitReason,
                    "Reason for visit",
                    &[
                        "Routine scheduled check",
                        "Student requested check",
                        "Symptoms of low BG",
                        "Symptoms of high BG",
                        "Pre-meal coverage",
                        "Post-activity check",
                        "Teacher concern",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::StudentSymptoms,
                    "Student reports",
                    &[
                        "No symptoms",
                        "Feeling shaky/tremulous",
                        "Sweating",
                        "Headache",
                        "Dizziness",
                        "Confusion",
                        "Nausea",
                        "Increased thirst",
                        "Increased urination",
                        "Fatigue/weakness",
                        "Blurred vision",
                        "Multiple symptoms",
                    ],
                ),
                FieldSpec::numeric(
                    FieldId::BgCheck,
                    "Current blood glucose level",
                    "BG reading (mg/dL)",
                    InputConstraints {
                        min: 0.0,
                        max: 999.0,
                        step: None,
                    },
                ),
                FieldSpec::checkbox(FieldId::BgSourceCgm, "Dexcom (CGM)").in_group("bg-source"),
                FieldSpec::checkbox(FieldId::BgSourceFingerstick, "Manual fingerstick")
                    .in_group("bg-source"),
                FieldSpec::numeric(
                    FieldId::CarbsConsumed,
                    "Carbohydrates consumed",
                    "Grams of carbs",
                    InputConstraints {
                        min: 0.0,
                        max: 500.0,
                        step: Some(1.0),
                    },
                ),
                FieldSpec::numeric(
                    FieldId::InsulinAdmin,
                    "Insulin administered",
                    "Units given",
                    InputConstraints {
                        min: 0.0,
                        max: 100.0,
                        step: Some(0.5),
                    },
                ),
                FieldSpec::select(
                    FieldId::InsulinType,
                    "Type of insulin",
                    &[
                        "Rapid-acting (Humalog/Novolog)",
                        "Short-acting (Regular)",
                        "Intermediate-acting (NPH)",
                        "Long-acting (Lantus/Levemir)",
                        "Per student's orders",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::InsulinDelivery,
                    "Insulin delivery method",
                    &[
                        "Insulin pump",
                        "Insulin pen",
                        "Syringe",
                        "Pre-filled syringe from parent",
                    ],
                ),
                FieldSpec::select(
                    FieldId::InjectionSite,
                    "Injection site (if applicable)",
                    &[
                        "Abdomen",
                        "Right upper arm",
                        "Left upper arm",
                        "Right thigh",
                        "Left thigh",
                        "Buttocks",
                        "Via pump",
                        "N/A",
                    ],
                ),
                FieldSpec::select(
                    FieldId::InsulinReason,
                    "Reason for insulin",
                    &["Lunch coverage", "Correction dose", "Snack coverage", "High BG"],
                ),
                FieldSpec::select(
                    FieldId::SnackProvided,
                    "Snack/glucose provided for hypoglycemia",
                    &[
                        "None needed",
                        "15g glucose tablets",
                        "4 oz juice (15g carbs)",
                        "4 oz regular soda (15g carbs)",
                        "Graham crackers (3 squares)",
                        "8 oz milk (12g carbs)",
                        "Small fruit (15g carbs)",
                        "Honey/sugar packet",
                        OTHER_SPECIFY,
                    ],
                ),
                FieldSpec::checkbox(FieldId::OrdersChecked, "Medical orders reviewed and followed"),
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
