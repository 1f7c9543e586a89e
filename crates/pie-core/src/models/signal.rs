use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::field::FieldId;

/// How loudly a signal should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// What a signal is about. Lets the UI replace a previous alert of the same
/// kind instead of stacking them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SignalKind {
    HighCarbohydrate,
    CarbohydrateCapped,
    HighInsulinDose,
    CriticalHypoglycemia,
    CriticalHyperglycemia,
    UnrecognizedMedication,
}

/// An advisory or blocking message produced while validating one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetySignal {
    pub severity: Severity,
    pub kind: SignalKind,
    pub field: FieldId,
    pub title: String,
    pub message: String,
    pub requires_acknowledgment: bool,
}
