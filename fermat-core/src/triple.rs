use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use thiserror::Error;

use crate::metric;

/// Errors that can occur when constructing a [`Triple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TripleError {
    /// A component or the exponent is zero.
    #[error("{component} must be at least 1")]
    Zero { component: &'static str },
}

/// A candidate `(a, b, c)` for the exponent `n`.
///
/// All four values are at least one, so `c^n` is never zero and the
/// relative error of a triple is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    a: u64,
    b: u64,
    c: u64,
    n: u32,
}

impl Triple {
    /// Creates a triple.
    ///
    /// # Errors
    ///
    /// Returns [`TripleError::Zero`] naming the first zero component.
    pub fn new(a: u64, b: u64, c: u64, n: u32) -> Result<Self, TripleError> {
        for (component, value) in [("a", a), ("b", b), ("c", c), ("n", u64::from(n))] {
            if value == 0 {
                return Err(TripleError::Zero { component });
            }
        }
        Ok(Self { a, b, c, n })
    }

    #[must_use]
    pub fn a(&self) -> u64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> u64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> u64 {
        self.c
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the `(a, b)` pair the triple was derived from.
    #[must_use]
    pub fn pair(&self) -> (u64, u64) {
        (self.a, self.b)
    }

    /// Returns true if `gcd(a, b, c) = 1`.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.a.gcd(&self.b).gcd(&self.c) == 1
    }

    /// Computes the exact and relative deviation of this triple.
    #[must_use]
    pub fn evaluate(self) -> EvaluatedTriple {
        let (absolute_error, c_pow) = metric::deviation(self.a, self.b, self.c, self.n);
        let relative_error = metric::ratio(&absolute_error, &c_pow);
        EvaluatedTriple {
            triple: self,
            absolute_error,
            relative_error,
        }
    }
}

/// A [`Triple`] together with its deviation from `a^n + b^n = c^n`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedTriple {
    triple: Triple,
    absolute_error: BigUint,
    relative_error: f64,
}

impl EvaluatedTriple {
    /// Builds an exact solution row without recomputing powers.
    ///
    /// Callers must have verified `a^n + b^n = c^n` with integer arithmetic.
    #[must_use]
    pub fn exact(triple: Triple) -> Self {
        debug_assert!(
            metric::absolute_error(triple.a, triple.b, triple.c, triple.n).is_zero(),
            "not an exact solution: {triple:?}"
        );
        Self {
            triple,
            absolute_error: BigUint::zero(),
            relative_error: 0.0,
        }
    }

    #[must_use]
    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    /// Returns `|a^n + b^n - c^n|`.
    #[must_use]
    pub fn absolute_error(&self) -> &BigUint {
        &self.absolute_error
    }

    /// Returns the absolute error as `f64`, saturating to infinity.
    #[must_use]
    pub fn error_f64(&self) -> f64 {
        self.absolute_error.to_f64().unwrap_or(f64::INFINITY)
    }

    /// Returns `|a^n + b^n - c^n| / c^n`.
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        self.relative_error
    }

    /// Returns true if the triple satisfies the equation exactly.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.absolute_error.is_zero()
    }

    #[must_use]
    pub fn a(&self) -> u64 {
        self.triple.a
    }

    #[must_use]
    pub fn b(&self) -> u64 {
        self.triple.b
    }

    #[must_use]
    pub fn c(&self) -> u64 {
        self.triple.c
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.triple.n
    }
}
