//! Error types for exercise loading and random selection.
//!
//! Every variant is a data problem that should be fixed at the source, so
//! they surface at load/construction time and never mid-session.

use thiserror::Error;

/// Errors from picking an element out of a pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("cannot pick from an empty pool")]
    EmptyPool,
}

/// Errors from loading or validating an exercise set.
#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("exercise set is empty")]
    EmptyPool,

    #[error("exercise #{index} has an empty `{field}` field")]
    MissingField { index: usize, field: &'static str },

    #[error("duplicate exercise id {id}")]
    DuplicateId { id: String },

    #[error("exercise {id}: answer is not one of its choices")]
    AnswerNotAmongChoices { id: String },

    #[error("malformed exercise data: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SelectError> for ExerciseError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::EmptyPool => ExerciseError::EmptyPool,
        }
    }
}
