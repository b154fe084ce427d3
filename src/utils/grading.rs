use crate::errors::ExerciseError;

/// Highest score a grade band covers.
pub const MAX_SCORE: i64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Insufficient,
    Sufficient,
    Satisfactory,
    Good,
    VeryGood,
}

impl Grade {
    pub fn name(&self) -> &'static str {
        match self {
            Grade::Insufficient => "insufficient",
            Grade::Sufficient => "sufficient",
            Grade::Satisfactory => "satisfactory",
            Grade::Good => "good",
            Grade::VeryGood => "very good",
        }
    }
}

/// Map a score in [0, 400] to its band: 0-200, 201-250, 251-300, 301-350, 351-400.
pub fn grade(score: i64) -> Result<Grade, ExerciseError> {
    let g = match score {
        0..=200 => Grade::Insufficient,
        201..=250 => Grade::Sufficient,
        251..=300 => Grade::Satisfactory,
        301..=350 => Grade::Good,
        351..=MAX_SCORE => Grade::VeryGood,
        other => {
            return Err(ExerciseError::invalid(format!(
                "score must be in [0, {}] (got {})",
                MAX_SCORE, other
            )))
        }
    };
    Ok(g)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(grade(0).unwrap(), Grade::Insufficient);
        assert_eq!(grade(200).unwrap(), Grade::Insufficient);
        assert_eq!(grade(201).unwrap(), Grade::Sufficient);
        assert_eq!(grade(250).unwrap(), Grade::Sufficient);
        assert_eq!(grade(251).unwrap(), Grade::Satisfactory);
        assert_eq!(grade(333).unwrap(), Grade::Good);
        assert_eq!(grade(351).unwrap(), Grade::VeryGood);
        assert_eq!(grade(400).unwrap().name(), "very good");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(grade(-1), Err(ExerciseError::InvalidArgument(_))));
        assert!(matches!(grade(401), Err(ExerciseError::InvalidArgument(_))));
    }
}
