use crate::errors::ExerciseError;

/// Note values used by [`breakdown`], largest first.
pub const DENOMINATIONS: [i64; 5] = [100, 50, 20, 10, 5];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    /// `(note value, count)` for every entry of [`DENOMINATIONS`], in order.
    pub notes: Vec<(i64, i64)>,
    /// Amount left after the smallest note.
    pub remainder: i64,
}

/// Greedy split of `amount` into notes.
pub fn breakdown(amount: i64) -> Result<Breakdown, ExerciseError> {
    if amount < 0 {
        return Err(ExerciseError::invalid(format!("amount must be >= 0 (got {})", amount)));
    }

    let mut rest = amount;
    let notes = DENOMINATIONS
        .iter()
        .map(|&note| {
            let count = rest / note;
            rest %= note;
            (note, count)
        })
        .collect();
    Ok(Breakdown { notes, remainder: rest })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxAssessment {
    pub rate: f64,
    pub tax: f64,
    /// Income plus tax.
    pub total: f64,
}

/// Bracket rate for `income`: up to 5000 at 10%, 10000 at 22%, 15000 at 32%, above at 42%.
pub fn tax_rate(income: f64) -> Result<f64, ExerciseError> {
    if !(income.is_finite() && income >= 0.0) {
        return Err(ExerciseError::invalid(format!(
            "income must be finite and >= 0 (got {})",
            income
        )));
    }
    let rate = if income <= 5_000.0 {
        0.10
    } else if income <= 10_000.0 {
        0.22
    } else if income <= 15_000.0 {
        0.32
    } else {
        0.42
    };
    Ok(rate)
}

pub fn assess_tax(income: f64) -> Result<TaxAssessment, ExerciseError> {
    let rate = tax_rate(income)?;
    let tax = income * rate;
    Ok(TaxAssessment { rate, tax, total: income + tax })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown() {
        let b = breakdown(387).unwrap();
        assert_eq!(b.notes, vec![(100, 3), (50, 1), (20, 1), (10, 1), (5, 1)]);
        assert_eq!(b.remainder, 2);
    }

    #[test]
    fn test_breakdown_small_amounts() {
        let b = breakdown(0).unwrap();
        assert!(b.notes.iter().all(|&(_, count)| count == 0));
        assert_eq!(b.remainder, 0);

        let b = breakdown(4).unwrap();
        assert_eq!(b.remainder, 4);
    }

    #[test]
    fn test_breakdown_sums_back() {
        for amount in 0..1000 {
            let b = breakdown(amount).unwrap();
            let sum: i64 = b.notes.iter().map(|(note, count)| note * count).sum();
            assert_eq!(sum + b.remainder, amount, "Mismatch at amount = {amount}");
            assert!(b.remainder < 5);
        }
    }

    #[test]
    fn test_breakdown_negative() {
        assert!(matches!(breakdown(-1), Err(ExerciseError::InvalidArgument(_))));
    }

    #[test]
    fn test_tax_brackets() {
        assert_eq!(tax_rate(0.0).unwrap(), 0.10);
        assert_eq!(tax_rate(5_000.0).unwrap(), 0.10);
        assert_eq!(tax_rate(5_000.5).unwrap(), 0.22);
        assert_eq!(tax_rate(10_000.0).unwrap(), 0.22);
        assert_eq!(tax_rate(13_000.0).unwrap(), 0.32);
        assert_eq!(tax_rate(15_001.0).unwrap(), 0.42);
    }

    #[test]
    fn test_assess_tax() {
        let a = assess_tax(13_000.0).unwrap();
        assert!((a.tax - 4_160.0).abs() < 1e-6);
        assert!((a.total - 17_160.0).abs() < 1e-6);
    }

    #[test]
    fn test_tax_invalid_income() {
        for income in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(assess_tax(income), Err(ExerciseError::InvalidArgument(_))));
        }
    }
}
