use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::field::FieldId;
use crate::models::note::NoteSummary;
use crate::models::problem::ProblemKey;

/// One finalized note as kept in the bounded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub problem: ProblemKey,
    pub intervention_fields: BTreeSet<FieldId>,
    pub orders_checked: bool,
}

impl HistoryEntry {
    pub fn new(summary: &NoteSummary, timestamp: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            problem: summary.problem,
            intervention_fields: summary.intervention_fields.clone(),
            orders_checked: summary.orders_checked,
        }
    }
}
