use serde::Serialize;
use tracing::trace;

use pie_catalog::Catalog;
use pie_core::models::encounter::EncounterState;

use crate::composer::composer;
use crate::text::join_sentences;

pub const NO_PROBLEM_NARRATIVE: &str = "Student presented to health office.";
pub const INTERVENTION_PLACEHOLDER: &str = "(Complete intervention details)";
pub const EVALUATION_PLACEHOLDER: &str = "(Complete evaluation details)";

const PROBLEM_PREFIX: &str = "P: ";
const INTERVENTION_PREFIX: &str = "I: ";
const EVALUATION_PREFIX: &str = "E: ";

/// The three paragraphs of a note, without prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSections {
    pub problem: String,
    pub intervention: String,
    pub evaluation: String,
}

impl NoteSections {
    /// Render as note text, one paragraph per section separated by a blank
    /// line.
    pub fn render(&self, structured_prefix: bool) -> String {
        let (p, i, e) = if structured_prefix {
            (PROBLEM_PREFIX, INTERVENTION_PREFIX, EVALUATION_PREFIX)
        } else {
            ("", "", "")
        };
        format!(
            "{p}{}\n\n{i}{}\n\n{e}{}",
            self.problem, self.intervention, self.evaluation
        )
    }
}

/// Build each paragraph for `state`. With no problem selected the generic
/// opening and both placeholders are returned.
pub fn compose_sections(state: &EncounterState, catalog: &Catalog) -> NoteSections {
    let Some(key) = state.problem() else {
        return NoteSections {
            problem: NO_PROBLEM_NARRATIVE.to_string(),
            intervention: INTERVENTION_PLACEHOLDER.to_string(),
            evaluation: EVALUATION_PLACEHOLDER.to_string(),
        };
    };

    let composer = composer(key);
    let definition = catalog.problem(key);

    let sections = NoteSections {
        problem: composer.problem_narrative(state),
        intervention: join_sentences(composer.intervention_sentences(state))
            .unwrap_or_else(|| INTERVENTION_PLACEHOLDER.to_string()),
        evaluation: join_sentences(composer.evaluation_parts(state, definition))
            .unwrap_or_else(|| EVALUATION_PLACEHOLDER.to_string()),
    };
    trace!(problem = %key, "note composed");
    sections
}

/// Compose the full note text for `state`.
pub fn compose(state: &EncounterState, catalog: &Catalog) -> String {
    compose_sections(state, catalog).render(state.use_structured_prefix())
}
