//! pie-catalog
//!
//! Problem catalog and input safety rules. Pure data and pure functions:
//! defines the form fields of each encounter category, the clinical limits,
//! and the validation applied to raw input before it enters encounter state.

pub mod error;
pub mod fields;
pub mod limits;
pub mod medications;
pub mod problems;
pub mod validation;

use std::collections::HashSet;

use pie_core::models::encounter::FieldCatalog;
use pie_core::models::field::{FieldId, FieldValue, Section};
use pie_core::models::problem::ProblemKey;

use error::CatalogError;
use fields::{FieldKind, FieldSpec};

/// Trait implemented by each encounter category.
pub trait Problem: Send + Sync {
    fn key(&self) -> ProblemKey;

    /// Human-readable name (e.g., "Diabetes Management").
    fn name(&self) -> &str;

    fn interventions(&self) -> &[FieldSpec];

    fn evaluations(&self) -> &[FieldSpec];

    fn fields(&self, section: Section) -> &[FieldSpec] {
        match section {
            Section::Intervention => self.interventions(),
            Section::Evaluation => self.evaluations(),
        }
    }

    fn field(&self, id: FieldId) -> Option<&FieldSpec> {
        self.interventions()
            .iter()
            .chain(self.evaluations())
            .find(|f| f.id == id)
    }

    /// Declared fields plus their "Other (specify)" and time companions.
    fn accepts(&self, section: Section, id: FieldId) -> bool {
        self.fields(section).iter().any(|f| {
            f.id == id || f.id.other_companion() == Some(id) || f.id.time_companion() == Some(id)
        })
    }

    fn default_text(&self, id: FieldId) -> Option<&str> {
        self.field(id).and_then(|f| f.default_text.as_deref())
    }

    /// Checkboxes the form ticks when this problem is selected.
    fn initial_values(&self) -> Vec<(Section, FieldId, FieldValue)> {
        [Section::Intervention, Section::Evaluation]
            .into_iter()
            .flat_map(|section| {
                self.fields(section)
                    .iter()
                    .filter(|f| f.kind == FieldKind::Checkbox && f.checked_by_default)
                    .map(move |f| (section, f.id, FieldValue::Flag(true)))
            })
            .collect()
    }

    /// Check the definition's own invariants: unique ids across both
    /// sections, options on selects, constraints on numeric inputs.
    fn check_definition(&self) -> Vec<CatalogError> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();
        for spec in self.interventions().iter().chain(self.evaluations()) {
            if !seen.insert(spec.id) {
                errors.push(CatalogError::DuplicateField {
                    problem: self.key(),
                    field: spec.id,
                });
            }
            match spec.kind {
                FieldKind::Select if spec.options.is_empty() => {
                    errors.push(CatalogError::MissingOptions {
                        problem: self.key(),
                        field: spec.id,
                    });
                }
                FieldKind::NumericInput if spec.constraints.is_none() => {
                    errors.push(CatalogError::MissingConstraints {
                        problem: self.key(),
                        field: spec.id,
                    });
                }
                _ => {}
            }
        }
        errors
    }
}

/// Look up a problem definition. Every key has exactly one.
pub fn problem(key: ProblemKey) -> &'static dyn Problem {
    match key {
        ProblemKey::Diabetes => &problems::diabetes::Diabetes,
        ProblemKey::Medication => &problems::medication::Medication,
        ProblemKey::FirstAid => &problems::first_aid::FirstAid,
        ProblemKey::Other => &problems::other::Other,
    }
}

/// Return all registered problems, in form order.
pub fn all_problems() -> Vec<&'static dyn Problem> {
    ProblemKey::ALL.into_iter().map(problem).collect()
}

/// Find a field spec in whichever problem declares it first.
pub fn find_field(id: FieldId) -> Option<&'static FieldSpec> {
    ProblemKey::ALL
        .into_iter()
        .find_map(|key| problem(key).field(id))
}

/// The static catalog as a [`FieldCatalog`] for encounter state updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn problem(&self, key: ProblemKey) -> &'static dyn Problem {
        problem(key)
    }
}

impl FieldCatalog for Catalog {
    fn accepts(&self, key: ProblemKey, section: Section, field: FieldId) -> bool {
        problem(key).accepts(section, field)
    }

    fn initial_values(&self, key: ProblemKey) -> Vec<(Section, FieldId, FieldValue)> {
        problem(key).initial_values()
    }
}
