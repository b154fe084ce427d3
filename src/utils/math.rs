use num_bigint::BigUint;
use num_traits::One;

use crate::errors::ExerciseError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FactorialMethod { Exact, Checked }

impl FactorialMethod {
    /// `CHECKED` / `U64` select the fixed-width variant, anything else is exact.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "CHECKED" | "U64" => FactorialMethod::Checked,
            _ => FactorialMethod::Exact,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FactorialMethod::Exact => "exact",
            FactorialMethod::Checked => "checked-u64",
        }
    }
}

/// First `n` Fibonacci numbers, starting at fib(0) = 0.
pub fn fibonacci_sequence(n: u64) -> Result<Vec<u64>, ExerciseError> {
    let mut seq: Vec<u64> = Vec::with_capacity(n.min(94) as usize);
    for k in 0..n {
        let term = match seq.len() {
            0 => 0,
            1 => 1,
            len => seq[len - 1]
                .checked_add(seq[len - 2])
                .ok_or_else(|| ExerciseError::overflow(format!("fib({}) exceeds u64", k)))?,
        };
        seq.push(term);
    }
    Ok(seq)
}

/// Compute n! with arbitrary precision.
pub fn factorial(n: i64) -> Result<BigUint, ExerciseError> {
    if n < 0 {
        return Err(ExerciseError::invalid(format!("factorial of negative number {}", n)));
    }
    let mut result = BigUint::one();
    for i in 2..=n as u64 {
        result *= i;
    }
    Ok(result)
}

/// Compute n! in a u64, failing instead of wrapping.
pub fn factorial_u64(n: i64) -> Result<u64, ExerciseError> {
    if n < 0 {
        return Err(ExerciseError::invalid(format!("factorial of negative number {}", n)));
    }
    let mut result: u64 = 1;
    for i in 2..=n as u64 {
        result = result
            .checked_mul(i)
            .ok_or_else(|| ExerciseError::overflow(format!("{}! exceeds u64", n)))?;
    }
    Ok(result)
}

/// Positive divisors of `n` in ascending order.
pub fn divisors(n: i64) -> Result<Vec<i64>, ExerciseError> {
    if n <= 0 {
        return Err(ExerciseError::invalid(format!("divisors require n > 0 (got {})", n)));
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d: i64 = 1;
    // d <= n / d avoids overflowing d * d near i64::MAX
    while d <= n / d {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }

    small.extend(large.into_iter().rev());
    Ok(small)
}
