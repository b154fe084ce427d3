use thiserror::Error;

/// Failure raised by an exercise routine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("InvalidArgument: {0}")]
    InvalidArgument(String),
    #[error("Overflow: {0}")]
    Overflow(String),
}

impl ExerciseError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ExerciseError::InvalidArgument(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        ExerciseError::Overflow(msg.into())
    }
}
