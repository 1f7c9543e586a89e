use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::field::{FieldId, FieldValue, OTHER_SPECIFY, Section};
use crate::models::problem::ProblemKey;

/// Field membership per problem category.
///
/// Implemented by the static catalog; kept as a trait so the state type
/// does not depend on the catalog definitions.
pub trait FieldCatalog {
    /// Whether `field` may be recorded in `section` for `problem`.
    fn accepts(&self, problem: ProblemKey, section: Section, field: FieldId) -> bool;

    /// Values the form pre-fills when `problem` is selected.
    fn initial_values(&self, problem: ProblemKey) -> Vec<(Section, FieldId, FieldValue)>;
}

/// The answers collected for one encounter.
///
/// Updates never mutate in place: every setter returns a new state, so the
/// caller holds the only mutable reference and replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EncounterState {
    #[serde(default)]
    problem: Option<ProblemKey>,
    #[serde(default)]
    interventions: BTreeMap<FieldId, FieldValue>,
    #[serde(default)]
    evaluation: BTreeMap<FieldId, FieldValue>,
    #[serde(default = "default_prefix")]
    use_structured_prefix: bool,
}

fn default_prefix() -> bool {
    true
}

impl Default for EncounterState {
    fn default() -> Self {
        Self {
            problem: None,
            interventions: BTreeMap::new(),
            evaluation: BTreeMap::new(),
            use_structured_prefix: true,
        }
    }
}

impl EncounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn problem(&self) -> Option<ProblemKey> {
        self.problem
    }

    pub fn use_structured_prefix(&self) -> bool {
        self.use_structured_prefix
    }

    pub fn interventions(&self) -> &BTreeMap<FieldId, FieldValue> {
        &self.interventions
    }

    pub fn evaluation(&self) -> &BTreeMap<FieldId, FieldValue> {
        &self.evaluation
    }

    pub fn value(&self, section: Section, field: FieldId) -> Option<&FieldValue> {
        self.values(section).get(&field)
    }

    /// Non-empty text answer for `field`.
    pub fn text(&self, section: Section, field: FieldId) -> Option<&str> {
        self.value(section, field).and_then(FieldValue::as_text)
    }

    pub fn checked(&self, section: Section, field: FieldId) -> bool {
        self.value(section, field)
            .is_some_and(FieldValue::is_checked)
    }

    /// Switch category. Both answer maps are cleared and the category's
    /// initial values applied; the prefix preference is kept.
    pub fn with_problem(&self, problem: ProblemKey, catalog: &impl FieldCatalog) -> Self {
        let mut next = Self {
            problem: Some(problem),
            interventions: BTreeMap::new(),
            evaluation: BTreeMap::new(),
            use_structured_prefix: self.use_structured_prefix,
        };
        for (section, field, value) in catalog.initial_values(problem) {
            next.values_mut(section).insert(field, value);
        }
        next
    }

    /// Record (`Some`) or clear (`None`) one answer.
    ///
    /// Clearing a notification checkbox also clears its time companion, and
    /// moving a select off "Other (specify)" clears its `-other` text.
    pub fn with_value(
        &self,
        catalog: &impl FieldCatalog,
        section: Section,
        field: FieldId,
        value: Option<FieldValue>,
    ) -> Result<Self, CoreError> {
        let problem = self.problem.ok_or(CoreError::NoProblemSelected)?;
        if !catalog.accepts(problem, section, field) {
            return Err(CoreError::FieldNotInProblem {
                field,
                section,
                problem,
            });
        }

        let mut next = self.clone();
        let unchecked = matches!(value, Some(FieldValue::Flag(false)) | None);
        let specifies_other = value
            .as_ref()
            .and_then(FieldValue::as_text)
            .is_some_and(|text| text.contains(OTHER_SPECIFY));
        match value {
            Some(value) => {
                next.values_mut(section).insert(field, value);
            }
            None => {
                next.values_mut(section).remove(&field);
            }
        }
        if unchecked && let Some(time) = field.time_companion() {
            next.values_mut(section).remove(&time);
        }
        if !specifies_other && let Some(other) = field.other_companion() {
            next.values_mut(section).remove(&other);
        }
        Ok(next)
    }

    pub fn with_structured_prefix(&self, enabled: bool) -> Self {
        Self {
            use_structured_prefix: enabled,
            ..self.clone()
        }
    }

    /// Drop any answers the catalog does not accept for the selected
    /// problem. Used when restoring state from outside the process.
    pub fn sanitized(&self, catalog: &impl FieldCatalog) -> Self {
        let Some(problem) = self.problem else {
            return Self {
                use_structured_prefix: self.use_structured_prefix,
                ..Self::default()
            };
        };
        let keep = |section: Section, map: &BTreeMap<FieldId, FieldValue>| {
            map.iter()
                .filter(|(field, _)| catalog.accepts(problem, section, **field))
                .map(|(field, value)| (*field, value.clone()))
                .collect()
        };
        Self {
            problem: Some(problem),
            interventions: keep(Section::Intervention, &self.interventions),
            evaluation: keep(Section::Evaluation, &self.evaluation),
            use_structured_prefix: self.use_structured_prefix,
        }
    }

    /// Whether anything worth keeping has been entered.
    pub fn has_data_entered(&self) -> bool {
        self.problem.is_some()
            || self.interventions.values().any(FieldValue::is_set)
            || self.evaluation.values().any(FieldValue::is_set)
    }

    fn values(&self, section: Section) -> &BTreeMap<FieldId, FieldValue> {
        match section {
            Section::Intervention => &self.interventions,
            Section::Evaluation => &self.evaluation,
        }
    }

    fn values_mut(&mut self, section: Section) -> &mut BTreeMap<FieldId, FieldValue> {
        match section {
            Section::Intervention => &mut self.interventions,
            Section::Evaluation => &mut self.evaluation,
        }
    }
}
