use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Encounter category. Each key selects one catalog entry and one composer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ProblemKey {
    Diabetes,
    Medication,
    FirstAid,
    Other,
}

impl ProblemKey {
    pub const ALL: [ProblemKey; 4] = [
        ProblemKey::Diabetes,
        ProblemKey::Medication,
        ProblemKey::FirstAid,
        ProblemKey::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemKey::Diabetes => "diabetes",
            ProblemKey::Medication => "medication",
            ProblemKey::FirstAid => "first-aid",
            ProblemKey::Other => "other",
        }
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProblemKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProblem(s.to_string()))
    }
}
