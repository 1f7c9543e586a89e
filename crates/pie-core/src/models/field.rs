use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Select option whose meaning is carried by the field's `-other` companion.
pub const OTHER_SPECIFY: &str = "Other (specify)";

/// Every form field the catalog can declare, across all problem categories.
///
/// Ids are shared between categories where the form reuses a field
/// (`orders-checked`, `parent-contact`, the standard evaluation block).
/// Which ids belong to which category is declared by the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum FieldId {
    // Diabetes
    VisitReason,
    StudentSymptoms,
    BgCheck,
    BgSourceCgm,
    BgSourceFingerstick,
    CarbsConsumed,
    InsulinAdmin,
    InsulinType,
    InsulinDelivery,
    InjectionSite,
    InsulinReason,
    SnackProvided,
    SnackProvidedOther,

    // Medication
    MedName,
    MedClass,
    Dose,
    DoseUnit,
    Route,
    Reason,
    ReasonOther,
    PrnReason,
    TimeSinceLast,
    DoseVerification,
    WitnessedAdmin,

    // First aid
    InjuryType,
    Location,
    LocationOther,
    InjuryOccurred,
    InjuryMechanism,
    InitialAssessment,
    IceApplied,
    IceDuration,
    BandaidApplied,
    WoundCare,
    RestProvided,
    VitalSigns,
    HeadInjuryScreen,
    ReturnToActivity,

    // Shared interventions
    OrdersChecked,
    ParentContact,
    ParentContactOther,

    // Other
    CustomIntervention,
    CustomEvaluation,

    // Evaluation
    StandardEval,
    ParentNotified,
    ParentNotifiedTime,
    EmsNotified,
    EmsNotifiedTime,
    AdditionalEval,
}

impl FieldId {
    pub const ALL: [FieldId; 49] = [
        FieldId::VisitReason,
        FieldId::StudentSymptoms,
        FieldId::BgCheck,
        FieldId::BgSourceCgm,
        FieldId::BgSourceFingerstick,
        FieldId::CarbsConsumed,
        FieldId::InsulinAdmin,
        FieldId::InsulinType,
        FieldId::InsulinDelivery,
        FieldId::InjectionSite,
        FieldId::InsulinReason,
        FieldId::SnackProvided,
        FieldId::SnackProvidedOther,
        FieldId::MedName,
        FieldId::MedClass,
        FieldId::Dose,
        FieldId::DoseUnit,
        FieldId::Route,
        FieldId::Reason,
        FieldId::ReasonOther,
        FieldId::PrnReason,
        FieldId::TimeSinceLast,
        FieldId::DoseVerification,
        FieldId::WitnessedAdmin,
        FieldId::InjuryType,
        FieldId::Location,
        FieldId::LocationOther,
        FieldId::InjuryOccurred,
        FieldId::InjuryMechanism,
        FieldId::InitialAssessment,
        FieldId::IceApplied,
        FieldId::IceDuration,
        FieldId::BandaidApplied,
        FieldId::WoundCare,
        FieldId::RestProvided,
        FieldId::VitalSigns,
        FieldId::HeadInjuryScreen,
        FieldId::ReturnToActivity,
        FieldId::OrdersChecked,
        FieldId::ParentContact,
        FieldId::ParentContactOther,
        FieldId::CustomIntervention,
        FieldId::CustomEvaluation,
        FieldId::StandardEval,
        FieldId::ParentNotified,
        FieldId::ParentNotifiedTime,
        FieldId::EmsNotified,
        FieldId::EmsNotifiedTime,
        FieldId::AdditionalEval,
    ];

    /// The form id, as used in persisted state and pattern signatures.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::VisitReason => "visit-reason",
            FieldId::StudentSymptoms => "student-symptoms",
            FieldId::BgCheck => "bg-check",
            FieldId::BgSourceCgm => "bg-source-cgm",
            FieldId::BgSourceFingerstick => "bg-source-fingerstick",
            FieldId::CarbsConsumed => "carbs-consumed",
            FieldId::InsulinAdmin => "insulin-admin",
            FieldId::InsulinType => "insulin-type",
            FieldId::InsulinDelivery => "insulin-delivery",
            FieldId::InjectionSite => "injection-site",
            FieldId::InsulinReason => "insulin-reason",
            FieldId::SnackProvided => "snack-provided",
            FieldId::SnackProvidedOther => "snack-provided-other",
            FieldId::MedName => "med-name",
            FieldId::MedClass => "med-class",
            FieldId::Dose => "dose",
            FieldId::DoseUnit => "dose-unit",
            FieldId::Route => "route",
            FieldId::Reason => "reason",
            FieldId::ReasonOther => "reason-other",
            FieldId::PrnReason => "prn-reason",
            FieldId::TimeSinceLast => "time-since-last",
            FieldId::DoseVerification => "dose-verification",
            FieldId::WitnessedAdmin => "witnessed-admin",
            FieldId::InjuryType => "injury-type",
            FieldId::Location => "location",
            FieldId::LocationOther => "location-other",
            FieldId::InjuryOccurred => "injury-occurred",
            FieldId::InjuryMechanism => "injury-mechanism",
            FieldId::InitialAssessment => "initial-assessment",
            FieldId::IceApplied => "ice-applied",
            FieldId::IceDuration => "ice-duration",
            FieldId::BandaidApplied => "bandaid-applied",
            FieldId::WoundCare => "wound-care",
            FieldId::RestProvided => "rest-provided",
            FieldId::VitalSigns => "vital-signs",
            FieldId::HeadInjuryScreen => "head-injury-screen",
            FieldId::ReturnToActivity => "return-to-activity",
            FieldId::OrdersChecked => "orders-checked",
            FieldId::ParentContact => "parent-contact",
            FieldId::ParentContactOther => "parent-contact-other",
            FieldId::CustomIntervention => "custom-intervention",
            FieldId::CustomEvaluation => "custom-evaluation",
            FieldId::StandardEval => "standard-eval",
            FieldId::ParentNotified => "parent-notified",
            FieldId::ParentNotifiedTime => "parent-notified-time",
            FieldId::EmsNotified => "ems-notified",
            FieldId::EmsNotifiedTime => "ems-notified-time",
            FieldId::AdditionalEval => "additional-eval",
        }
    }

    /// Free-text companion that replaces an "Other (specify)" selection.
    pub fn other_companion(&self) -> Option<FieldId> {
        match self {
            FieldId::SnackProvided => Some(FieldId::SnackProvidedOther),
            FieldId::Reason => Some(FieldId::ReasonOther),
            FieldId::Location => Some(FieldId::LocationOther),
            FieldId::ParentContact => Some(FieldId::ParentContactOther),
            _ => None,
        }
    }

    /// Time-of-day companion recorded alongside a notification checkbox.
    pub fn time_companion(&self) -> Option<FieldId> {
        match self {
            FieldId::ParentNotified => Some(FieldId::ParentNotifiedTime),
            FieldId::EmsNotified => Some(FieldId::EmsNotifiedTime),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Which half of the form a field is answered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Intervention,
    Evaluation,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Intervention => f.write_str("intervention"),
            Section::Evaluation => f.write_str("evaluation"),
        }
    }
}

/// A field answer. Checkboxes carry a flag; selects, free text and numbers
/// carry text. An unset field is simply absent from the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// True for a checked box or non-empty text.
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Flag(checked) => *checked,
            FieldValue::Text(text) => !text.is_empty(),
        }
    }

    /// Non-empty text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}
