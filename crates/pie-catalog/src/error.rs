use thiserror::Error;

use pie_core::models::field::FieldId;
use pie_core::models::problem::ProblemKey;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate field '{field}' in problem '{problem}'")]
    DuplicateField { problem: ProblemKey, field: FieldId },

    #[error("select field '{field}' in problem '{problem}' declares no options")]
    MissingOptions { problem: ProblemKey, field: FieldId },

    #[error("numeric field '{field}' in problem '{problem}' declares no input constraints")]
    MissingConstraints { problem: ProblemKey, field: FieldId },
}
