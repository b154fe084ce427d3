use crate::errors::ExerciseError;

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i64) -> Result<bool, ExerciseError> {
    if year <= 0 {
        return Err(ExerciseError::invalid(format!("year must be > 0 (got {})", year)));
    }
    Ok(year % 4 == 0 && (year % 100 != 0 || year % 400 == 0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Day number of the week, 1 = Monday through 7 = Sunday.
pub fn weekday(day: i64) -> Result<Weekday, ExerciseError> {
    let wd = match day {
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        6 => Weekday::Saturday,
        7 => Weekday::Sunday,
        other => {
            return Err(ExerciseError::invalid(format!(
                "day must be in [1, 7] (got {})",
                other
            )))
        }
    };
    Ok(wd)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        for y in [4, 1996, 2000, 2024, 2400] {
            assert!(is_leap_year(y).unwrap(), "{y} should be a leap year");
        }
        for y in [1, 1900, 2023, 2100, 2200] {
            assert!(!is_leap_year(y).unwrap(), "{y} should not be a leap year");
        }
    }

    #[test]
    fn test_leap_year_invalid() {
        assert!(matches!(is_leap_year(0), Err(ExerciseError::InvalidArgument(_))));
        assert!(matches!(is_leap_year(-4), Err(ExerciseError::InvalidArgument(_))));
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(weekday(1).unwrap(), Weekday::Monday);
        assert_eq!(weekday(4).unwrap().name(), "Thursday");
        assert_eq!(weekday(7).unwrap(), Weekday::Sunday);
        for day in [0, 8, -1] {
            assert!(matches!(weekday(day), Err(ExerciseError::InvalidArgument(_))));
        }
    }
}
