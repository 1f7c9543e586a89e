use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::encounter::EncounterState;
use crate::models::field::{FieldId, Section};
use crate::models::problem::ProblemKey;

/// What the pattern tracker learns from one finalized note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoteSummary {
    pub problem: ProblemKey,
    pub intervention_fields: BTreeSet<FieldId>,
    pub orders_checked: bool,
}

impl NoteSummary {
    /// Summarize a state. `None` when no problem is selected.
    pub fn from_state(state: &EncounterState) -> Option<Self> {
        let problem = state.problem()?;
        Some(Self {
            problem,
            intervention_fields: state.interventions().keys().copied().collect(),
            orders_checked: state.checked(Section::Intervention, FieldId::OrdersChecked),
        })
    }

    /// `<problem>-<id>,<id>,...` with ids in lexical order.
    pub fn signature(&self) -> String {
        let mut ids: Vec<&str> = self.intervention_fields.iter().map(FieldId::as_str).collect();
        ids.sort_unstable();
        format!("{}-{}", self.problem, ids.join(","))
    }
}
