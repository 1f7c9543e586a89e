use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::encounter::EncounterState;

/// An auto-saved, not yet finalized encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Draft {
    pub id: Uuid,
    pub state: EncounterState,
    pub saved_at: jiff::Timestamp,
}

impl Draft {
    pub fn new(state: EncounterState, saved_at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
            saved_at,
        }
    }
}
