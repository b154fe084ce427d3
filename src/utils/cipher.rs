use crate::errors::ExerciseError;

pub const ALPHABET_LEN: i64 = 26;

fn check_shift(shift: i64) -> Result<u8, ExerciseError> {
    if !(0..ALPHABET_LEN).contains(&shift) {
        return Err(ExerciseError::invalid(format!(
            "shift must be in [0, {}] (got {})",
            ALPHABET_LEN - 1,
            shift
        )));
    }
    Ok(shift as u8)
}

fn shift_char(c: char, shift: u8) -> char {
    if c.is_ascii_lowercase() {
        (((c as u8 - b'a' + shift) % ALPHABET_LEN as u8) + b'a') as char
    } else {
        c
    }
}

/// Shift every lowercase ASCII letter forward by `shift`, wrapping at 'z'.
/// Any other character is copied unchanged.
pub fn encode(word: &str, shift: i64) -> Result<String, ExerciseError> {
    let shift = check_shift(shift)?;
    Ok(word.chars().map(|c| shift_char(c, shift)).collect())
}

/// Inverse of [`encode`] for the same shift.
pub fn decode(word: &str, shift: i64) -> Result<String, ExerciseError> {
    let shift = check_shift(shift)?;
    encode(word, (ALPHABET_LEN - shift as i64) % ALPHABET_LEN)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode() {
        assert_eq!(encode("abc", 3).unwrap(), "def");
        assert_eq!(encode("xyz", 3).unwrap(), "abc");
        assert_eq!(encode("hallo", 0).unwrap(), "hallo");
        assert_eq!(encode("z", 25).unwrap(), "y");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(encode("Hello, World 42!", 1).unwrap(), "Hfmmp, Wpsme 42!");
        assert_eq!(encode("äö-ß", 5).unwrap(), "äö-ß");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("def", 3).unwrap(), "abc");
        assert_eq!(decode("abc", 3).unwrap(), "xyz");
        assert_eq!(decode("abc", 0).unwrap(), "abc");
    }

    #[test]
    fn test_invalid_shift() {
        for shift in [-1, 26, 100] {
            assert!(matches!(encode("abc", shift), Err(ExerciseError::InvalidArgument(_))));
            assert!(matches!(decode("abc", shift), Err(ExerciseError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_round_trip_all_shifts() {
        let mut rng = rand::thread_rng();
        let charset: Vec<char> = "abcdefghijklmnopqrstuvwxyzXYZ 019.,!é".chars().collect();
        for shift in 0..ALPHABET_LEN {
            for _ in 0..50 {
                let len = rng.gen_range(0..20);
                let word: String = (0..len)
                    .map(|_| charset[rng.gen_range(0..charset.len())])
                    .collect();
                let encoded = encode(&word, shift).unwrap();
                assert_eq!(decode(&encoded, shift).unwrap(), word, "shift {shift}");
            }
        }
    }
}
