use thiserror::Error;

use crate::models::field::{FieldId, Section};
use crate::models::problem::ProblemKey;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    #[error("unknown field id: {0}")]
    UnknownField(String),

    #[error("no problem selected")]
    NoProblemSelected,

    #[error("field '{field}' is not a {section} field of problem '{problem}'")]
    FieldNotInProblem {
        field: FieldId,
        section: Section,
        problem: ProblemKey,
    },
}
