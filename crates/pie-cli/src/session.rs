//! One encounter at a time: raw input is validated, committed to a new
//! state, auto-saved as a draft, and recomposed into note text.

use jiff::Timestamp;
use serde::Serialize;
use tracing::debug;

use pie_catalog::Catalog;
use pie_catalog::medications::check_medication_name;
use pie_catalog::validation::{Confirm, validate};
use pie_compose::compose;
use pie_core::error::CoreError;
use pie_core::models::draft::Draft;
use pie_core::models::encounter::{EncounterState, FieldCatalog};
use pie_core::models::field::{FieldId, FieldValue, Section};
use pie_core::models::note::NoteSummary;
use pie_core::models::problem::ProblemKey;
use pie_core::models::signal::SafetySignal;
use pie_patterns::PatternTracker;
use pie_patterns::advisories::Advisory;
use pie_storage::Store;

/// Result of one field input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputOutcome {
    pub signals: Vec<SafetySignal>,
    /// A critical value was not acknowledged; the field is now unset.
    pub blocked: bool,
}

/// A note that was finalized and recorded.
#[derive(Debug, Clone, Serialize)]
pub struct Finalized {
    pub note: String,
    /// Whether the record reached storage. Tracking continues in memory
    /// either way.
    pub persisted: bool,
    pub advisories: Vec<Advisory>,
}

pub struct Session<S: Store> {
    state: EncounterState,
    tracker: PatternTracker<S>,
    autosave: bool,
}

impl<S: Store> Session<S> {
    pub fn new(tracker: PatternTracker<S>, use_structured_prefix: bool) -> Self {
        Self {
            state: EncounterState::new().with_structured_prefix(use_structured_prefix),
            tracker,
            autosave: true,
        }
    }

    /// Disable draft auto-save for this session.
    pub fn without_autosave(self) -> Self {
        Self {
            autosave: false,
            ..self
        }
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn tracker(&self) -> &PatternTracker<S> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PatternTracker<S> {
        &mut self.tracker
    }

    /// Replace the state with the saved draft, if one is recent enough.
    /// Answers that no longer belong to the draft's problem are dropped.
    pub fn resume_draft(&mut self, now: Timestamp) -> Option<Draft> {
        let draft = self.tracker.persistence().load_draft(now)?;
        self.state = draft.state.sanitized(&Catalog);
        debug!(saved_at = %draft.saved_at, "draft resumed");
        Some(draft)
    }

    /// Replace the state wholesale, as when a state file is loaded.
    pub fn load_state(&mut self, state: EncounterState) {
        self.state = state.sanitized(&Catalog);
    }

    pub fn select_problem(&mut self, problem: ProblemKey, now: Timestamp) {
        self.state = self.state.with_problem(problem, &Catalog);
        self.autosave(now);
    }

    pub fn set_structured_prefix(&mut self, enabled: bool) {
        self.state = self.state.with_structured_prefix(enabled);
    }

    /// Validate `raw` and commit whatever the validator accepted. Fields
    /// outside the selected problem are rejected before validation.
    pub fn input(
        &mut self,
        section: Section,
        field: FieldId,
        raw: FieldValue,
        confirm: &mut dyn Confirm,
        now: Timestamp,
    ) -> Result<InputOutcome, CoreError> {
        // Reject foreign fields before any acknowledgment prompt is shown.
        let problem = self.state.problem().ok_or(CoreError::NoProblemSelected)?;
        if !Catalog.accepts(problem, section, field) {
            return Err(CoreError::FieldNotInProblem {
                field,
                section,
                problem,
            });
        }

        let result = validate(field, raw, &self.state, confirm);
        let mut signals = result.signals;

        if field == FieldId::MedName
            && let Some(name) = result.accepted.as_ref().and_then(FieldValue::as_text)
        {
            signals.extend(check_medication_name(name));
        }

        self.state = self
            .state
            .with_value(&Catalog, section, field, result.accepted)?;
        self.autosave(now);

        Ok(InputOutcome {
            signals,
            blocked: result.blocked,
        })
    }

    pub fn clear(&mut self, section: Section, field: FieldId, now: Timestamp) -> Result<(), CoreError> {
        self.state = self.state.with_value(&Catalog, section, field, None)?;
        self.autosave(now);
        Ok(())
    }

    pub fn note(&self) -> String {
        compose(&self.state, &Catalog)
    }

    /// Record the current note in the usage patterns and clear the draft.
    /// The state itself is kept so the note can still be read back.
    pub fn finalize(&mut self, now: Timestamp) -> Result<Finalized, CoreError> {
        let summary = NoteSummary::from_state(&self.state).ok_or(CoreError::NoProblemSelected)?;
        let note = self.note();
        let persisted = self.tracker.record(&summary, now);
        self.tracker.persistence().clear_draft();

        Ok(Finalized {
            note,
            persisted,
            advisories: self.tracker.advisories(now),
        })
    }

    /// Start over with an empty state, keeping the prefix preference.
    pub fn reset(&mut self) {
        self.state = EncounterState::new().with_structured_prefix(self.state.use_structured_prefix());
        self.tracker.persistence().clear_draft();
    }

    fn autosave(&mut self, now: Timestamp) {
        if self.autosave {
            self.tracker.persistence().save_draft(&self.state, now);
        }
    }
}
