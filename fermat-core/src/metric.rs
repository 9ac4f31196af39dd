//! Deviation of a triple from `a^n + b^n = c^n`.
//!
//! Powers are computed with [`BigUint`], so the absolute error is exact for
//! any bound and exponent. Only the final relative error is reduced to `f64`.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

/// Errors that can occur when computing an error metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricError {
    /// The relative error is undefined for `c = 0`.
    #[error("relative error is undefined for c = 0")]
    DivisionByZero,
}

/// Returns `base^n` as an exact big integer.
#[must_use]
pub fn power(base: u64, n: u32) -> BigUint {
    BigUint::from(base).pow(n)
}

/// Returns the exact sum `a^n + b^n`.
#[must_use]
pub fn power_sum(a: u64, b: u64, n: u32) -> BigUint {
    power(a, n) + power(b, n)
}

/// Computes `|a^n + b^n - c^n|` exactly.
///
/// # Example
///
/// ```
/// use fermat_core::{BigUint, metric::absolute_error};
///
/// assert_eq!(absolute_error(3, 4, 5, 2), BigUint::from(0_u32));
/// assert_eq!(absolute_error(3, 4, 4, 3), BigUint::from(27_u32));
/// ```
#[must_use]
pub fn absolute_error(a: u64, b: u64, c: u64, n: u32) -> BigUint {
    deviation(a, b, c, n).0
}

/// Computes `|a^n + b^n - c^n| / c^n`.
///
/// # Errors
///
/// Returns [`MetricError::DivisionByZero`] if `c = 0`.
pub fn relative_error(a: u64, b: u64, c: u64, n: u32) -> Result<f64, MetricError> {
    if c == 0 {
        return Err(MetricError::DivisionByZero);
    }
    let (error, c_pow) = deviation(a, b, c, n);
    Ok(ratio(&error, &c_pow))
}

/// Returns the absolute error together with `c^n`.
pub(crate) fn deviation(a: u64, b: u64, c: u64, n: u32) -> (BigUint, BigUint) {
    let sum = power_sum(a, b, n);
    let c_pow = power(c, n);
    let error = if sum >= c_pow {
        sum - &c_pow
    } else {
        &c_pow - sum
    };
    (error, c_pow)
}

/// Divides two big integers, returning the quotient as `f64`.
///
/// Both operands are shifted right until the denominator fits in 64 bits,
/// so the result stays finite and accurate even when `c^n` is far outside
/// the range of `f64`.
/// A zero denominator yields infinity, or NaN when the numerator is zero too.
#[must_use]
pub fn ratio(numerator: &BigUint, denominator: &BigUint) -> f64 {
    if denominator.is_zero() {
        return if numerator.is_zero() {
            f64::NAN
        } else {
            f64::INFINITY
        };
    }

    let shift = denominator.bits().saturating_sub(64);
    let num = (numerator >> shift).to_f64().unwrap_or(f64::INFINITY);
    let den = (denominator >> shift).to_f64().unwrap_or(f64::INFINITY);
    num / den
}
