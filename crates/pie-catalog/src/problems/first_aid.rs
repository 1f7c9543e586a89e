use pie_core::models::field::FieldId;
use pie_core::models::problem::ProblemKey;

use crate::Problem;
use crate::fields::FieldSpec;
use crate::problems::shared::{self, OTHER_SPECIFY};

/// First aid and minor injury: what happened, where, treatment given and
/// return-to-activity status.
pub struct FirstAid;

impl Problem for FirstAid {
    fn key(&self) -> ProblemKey {
        ProblemKey::FirstAid
    }

    fn name(&self) -> &str {
        "First Aid / Minor Injury"
    }

    fn interventions(&self) -> &[FieldSpec] {
        static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
            let durations = [
                "N/A",
                "5 minutes",
                "10 minutes",
                "15 minutes",
                "20 minutes",
                "30 minutes",
            ];

            vec![
                FieldSpec::select(
                    FieldId::InjuryType,
                    "Type of injury/complaint",
                    &[
                        "Abrasion/scrape",
                        "Bump/contusion",
                        "Minor cut/laceration",
                        "Headache",
                        "Stomachache",
                        "Nosebleed",
                        "Dental injury",
                        "Sprain/strain",
                        "Insect bite/sting",
                        "Rash/skin irritation",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::Location,
                    "Location of injury",
                    &[
                        "Head",
                        "Forehead",
                        "Face",
                        "Eye",
                        "Ear",
                        "Nose",
                        "Mouth/lips",
                        "Teeth/jaw",
                        "Neck",
                        "Shoulder",
                        "Upper arm",
                        "Elbow",
                        "Forearm",
                        "Wrist",
                        "Hand",
                        "Finger(s)",
                        "Chest",
                        "Abdomen",
                        "Back",
                        "Hip",
                        "Thigh",
                        "Knee",
                        "Lower leg",
                        "Ankle",
                        "Foot",
                        "Toe(s)",
                        "Multiple locations",
                        OTHER_SPECIFY,
                    ],
                ),
                FieldSpec::select(
                    FieldId::InjuryOccurred,
                    "How injury occurred",
                    &[
                        "Playground",
                        "PE class",
                        "Classroom",
                        "Hallway",
                        "Cafeteria",
                        "Recess",
                        "Sports/athletics",
                        "Stairs",
                        "Bathroom",
                        "Bus area",
                        "Student reports unknown",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::InjuryMechanism,
                    "Mechanism of injury",
                    &[
                        "Fall from height",
                        "Fall on same level",
                        "Collision with person",
                        "Collision with object",
                        "Struck by object",
                        "Contact with sharp object",
                        "Twisting motion",
                        "Non-traumatic/spontaneous",
                        "Unknown",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::InitialAssessment,
                    "Initial assessment",
                    &[
                        "Alert and oriented",
                        "No visible distress",
                        "Mild distress",
                        "Moderate distress",
                        "Denies loss of consciousness",
                        "Brief LOC reported",
                        "Other",
                    ],
                ),
                FieldSpec::checkbox(FieldId::IceApplied, "Ice pack applied"),
                FieldSpec::select(FieldId::IceDuration, "Ice application duration", &durations),
                FieldSpec::checkbox(FieldId::BandaidApplied, "Band-aid/dressing applied"),
                FieldSpec::select(
                    FieldId::WoundCare,
                    "Wound care performed",
                    &[
                        "N/A",
                        "Cleaned with soap and water",
                        "Cleaned with saline",
                        "Antiseptic applied",
                        "Pressure applied for bleeding control",
                        "Gauze dressing applied",
                        "Other",
                    ],
                ),
                FieldSpec::select(
                    FieldId::RestProvided,
                    "Rest period provided",
                    &[
                        "N/A",
                        "5 minutes",
                        "10 minutes",
                        "15 minutes",
                        "20 minutes",
                        "30 minutes",
                        "Remained until dismissal",
                    ],
                ),
                FieldSpec::text(
                    FieldId::VitalSigns,
                    "Vital signs assessed",
                    "Results (if applicable)",
                ),
                FieldSpec::select(
                    FieldId::HeadInjuryScreen,
                    "Head injury screening",
                    &[
                        "N/A - Not head injury",
                        "No signs of concussion",
                        "Concussion symptoms present",
                        "LOC reported",
                        "Vomiting present",
                        "Confusion noted",
                        "Headache persists",
                        "Refer for evaluation",
                    ],
                ),
                FieldSpec::select(
                    FieldId::ReturnToActivity,
                    "Return to activity status",
                    &[
                        "Returned to class immediately",
                        "Returned to class after rest",
                        "Returned to class with restrictions",
                        "Unable to return to activity",
                        "Parent pickup arranged",
                        "Referred for further evaluation",
                    ],
                ),
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
