use std::f64::consts::LN_2;

use fermat_core::{BigUint, metric};
use num_traits::ToPrimitive;

/// Largest bit length converted to `f64` directly; larger sums are scaled.
const DIRECT_BITS: u64 = 1000;

/// The two integers immediately below and above a real `n`-th root.
///
/// The float root is computed once and never trusted as exact: both
/// neighbours are handed to integer verification. When the root is an
/// integer and the float lands a hair below it, the true root is `high`;
/// when it lands on or above, the true root is `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    low: u64,
    high: u64,
}

impl Bracket {
    /// Brackets the real root of `a^n + b^n`.
    #[must_use]
    pub fn around(a: u64, b: u64, n: u32) -> Self {
        Self::from_root(real_root(&metric::power_sum(a, b, n), n))
    }

    /// Brackets a real value by `floor(value)` and `floor(value) + 1`.
    ///
    /// Negative and NaN values floor to zero; values past `u64::MAX` saturate.
    #[must_use]
    pub fn from_root(c_real: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let low = c_real.floor() as u64;
        Self {
            low,
            high: low.saturating_add(1),
        }
    }

    #[must_use]
    pub fn low(&self) -> u64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Returns the candidates in tie-break order: `low` first.
    #[must_use]
    pub fn candidates(&self) -> [u64; 2] {
        [self.low, self.high]
    }
}

/// Returns `value^(1/n)` in floating point.
///
/// Values that fit in `f64` are converted directly and raised with `powf`.
/// Larger values go through logarithms on a scaled-down mantissa.
#[must_use]
pub fn real_root(value: &BigUint, n: u32) -> f64 {
    let exponent = f64::from(n).recip();
    let shift = value.bits().saturating_sub(DIRECT_BITS);
    let scaled = (value >> shift).to_f64().unwrap_or(f64::INFINITY);

    if shift == 0 {
        return scaled.powf(exponent);
    }

    #[allow(clippy::cast_precision_loss)]
    let shift = shift as f64;
    ((scaled.ln() + shift * LN_2) * exponent).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn brackets_cube_root_of_91() {
        // 3^3 + 4^3 = 91, cube root ≈ 4.4979
        let bracket = Bracket::around(3, 4, 3);
        assert_eq!(bracket.candidates(), [4, 5]);
    }

    #[test]
    fn perfect_square_is_bracketed() {
        let bracket = Bracket::around(3, 4, 2);
        assert!(bracket.candidates().contains(&5));
    }

    #[test]
    fn root_just_below_integer_keeps_true_root_as_high() {
        let bracket = Bracket::from_root(4.999_999_999_999_999);
        assert_eq!(bracket.candidates(), [4, 5]);
    }

    #[test]
    fn negative_and_nan_floor_to_zero() {
        assert_eq!(Bracket::from_root(-2.5).low(), 0);
        assert_eq!(Bracket::from_root(f64::NAN).low(), 0);
    }

    #[test]
    fn saturates_at_u64_max() {
        let bracket = Bracket::from_root(f64::INFINITY);
        assert_eq!(bracket.low(), u64::MAX);
        assert_eq!(bracket.high(), u64::MAX);
    }

    #[test]
    fn real_root_of_small_value() {
        assert_relative_eq!(real_root(&BigUint::from(91_u32), 3), 91_f64.cbrt(), epsilon = 1e-12);
    }

    #[test]
    fn real_root_beyond_f64_range() {
        // (2^1200)^(1/100) = 2^12
        let value = BigUint::from(1_u32) << 1200_u32;
        assert_relative_eq!(real_root(&value, 100), 4096.0, max_relative = 1e-12);
    }
}
