use std::io;

use thiserror::Error;

use crate::errors::ExerciseError;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("BadInput: {0}")]
    BadInput(String),
    #[error("UnknownOption: {0}")]
    UnknownOption(String),
    #[error("EndOfInput")]
    EndOfInput,
    #[error("IO: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}

impl MenuError {
    /// Errors after which the session cannot continue reading.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MenuError::EndOfInput | MenuError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_error_is_transparent() {
        let err: MenuError = ExerciseError::invalid("radius must be > 0").into();
        assert_eq!(err.to_string(), "InvalidArgument: radius must be > 0");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_fatal_errors() {
        assert!(MenuError::EndOfInput.is_fatal());
        assert!(MenuError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).is_fatal());
        assert!(!MenuError::BadInput("x".into()).is_fatal());
    }
}
