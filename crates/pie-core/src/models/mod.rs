pub mod draft;
pub mod encounter;
pub mod field;
pub mod history;
pub mod note;
pub mod patterns;
pub mod problem;
pub mod signal;
