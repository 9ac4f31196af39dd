use thiserror::Error;

use crate::constraint::{
    Constrained, ConstraintError, StrictlyPositive, UnitIntervalLeftOpen,
};

/// Relative-error threshold used when none is configured.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 0.1;

/// Cap on `a` and `b` for batch generation, keeping the grid interactive.
pub const DEFAULT_GRID_LIMIT: u64 = 30;

/// Errors that can occur when validating [`SearchBounds`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("invalid max_value")]
    MaxValue(#[source] ConstraintError),

    #[error("invalid exponent {n}")]
    Exponent {
        n: u32,
        #[source]
        source: ConstraintError,
    },

    #[error("at least one exponent is required")]
    NoExponents,

    #[error("invalid error threshold {value}")]
    Threshold {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid grid_limit")]
    GridLimit(#[source] ConstraintError),
}

/// Validated configuration for one search run.
///
/// Exponents are kept sorted and free of duplicates.
///
/// # Example
///
/// ```
/// use fermat_core::SearchBounds;
///
/// let bounds = SearchBounds::new(50, [4, 2, 3, 2]).unwrap();
/// assert_eq!(bounds.n_values().collect::<Vec<_>>(), vec![2, 3, 4]);
/// assert_eq!(bounds.batch_limit(), 30);
/// assert_eq!(bounds.error_threshold(), 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSearchBounds", into = "RawSearchBounds")
)]
pub struct SearchBounds {
    max_value: Constrained<u64, StrictlyPositive>,
    n_values: Vec<Constrained<u32, StrictlyPositive>>,
    error_threshold: Constrained<f64, UnitIntervalLeftOpen>,
    grid_limit: Constrained<u64, StrictlyPositive>,
}

impl SearchBounds {
    /// Creates bounds with the default threshold and grid limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_value` or any exponent is zero, or if no
    /// exponents are given.
    pub fn new(
        max_value: u64,
        n_values: impl IntoIterator<Item = u32>,
    ) -> Result<Self, BoundsError> {
        let max_value = StrictlyPositive::new(max_value).map_err(BoundsError::MaxValue)?;

        let mut n_values = n_values
            .into_iter()
            .map(|n| StrictlyPositive::new(n).map_err(|source| BoundsError::Exponent { n, source }))
            .collect::<Result<Vec<_>, _>>()?;
        if n_values.is_empty() {
            return Err(BoundsError::NoExponents);
        }
        n_values.sort_unstable();
        n_values.dedup();

        Ok(Self {
            max_value,
            n_values,
            error_threshold: threshold(DEFAULT_ERROR_THRESHOLD)?,
            grid_limit: StrictlyPositive::new(DEFAULT_GRID_LIMIT).map_err(BoundsError::GridLimit)?,
        })
    }

    /// Replaces the relative-error threshold.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Threshold`] unless `0 < value ≤ 1`.
    pub fn with_error_threshold(mut self, value: f64) -> Result<Self, BoundsError> {
        self.error_threshold = threshold(value)?;
        Ok(self)
    }

    /// Replaces the batch grid cap.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::GridLimit`] if `value` is zero.
    pub fn with_grid_limit(mut self, value: u64) -> Result<Self, BoundsError> {
        self.grid_limit = StrictlyPositive::new(value).map_err(BoundsError::GridLimit)?;
        Ok(self)
    }

    /// Upper bound for `a`, `b`, and `c`.
    #[must_use]
    pub fn max_value(&self) -> u64 {
        self.max_value.get()
    }

    /// Exponents to evaluate, in ascending order.
    pub fn n_values(&self) -> impl Iterator<Item = u32> + '_ {
        self.n_values.iter().map(Constrained::get)
    }

    #[must_use]
    pub fn error_threshold(&self) -> f64 {
        self.error_threshold.get()
    }

    #[must_use]
    pub fn grid_limit(&self) -> u64 {
        self.grid_limit.get()
    }

    /// Upper bound for `a` and `b` in batch generation: `min(max_value, grid_limit)`.
    #[must_use]
    pub fn batch_limit(&self) -> u64 {
        self.max_value().min(self.grid_limit())
    }
}

fn threshold(value: f64) -> Result<Constrained<f64, UnitIntervalLeftOpen>, BoundsError> {
    UnitIntervalLeftOpen::new(value).map_err(|source| BoundsError::Threshold { value, source })
}

/// Unvalidated on-disk shape of [`SearchBounds`].
#[cfg(feature = "serde-derive")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSearchBounds {
    max_value: u64,
    n_values: Vec<u32>,
    #[serde(default = "default_error_threshold")]
    error_threshold: f64,
    #[serde(default = "default_grid_limit")]
    grid_limit: u64,
}

#[cfg(feature = "serde-derive")]
fn default_error_threshold() -> f64 {
    DEFAULT_ERROR_THRESHOLD
}

#[cfg(feature = "serde-derive")]
fn default_grid_limit() -> u64 {
    DEFAULT_GRID_LIMIT
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawSearchBounds> for SearchBounds {
    type Error = BoundsError;

    fn try_from(raw: RawSearchBounds) -> Result<Self, Self::Error> {
        SearchBounds::new(raw.max_value, raw.n_values)?
            .with_error_threshold(raw.error_threshold)?
            .with_grid_limit(raw.grid_limit)
    }
}

#[cfg(feature = "serde-derive")]
impl From<SearchBounds> for RawSearchBounds {
    fn from(bounds: SearchBounds) -> Self {
        Self {
            max_value: bounds.max_value(),
            n_values: bounds.n_values().collect(),
            error_threshold: bounds.error_threshold(),
            grid_limit: bounds.grid_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let bounds = SearchBounds::new(15, [3]).unwrap();
        assert_eq!(bounds.max_value(), 15);
        assert_eq!(bounds.grid_limit(), DEFAULT_GRID_LIMIT);
        assert_eq!(bounds.batch_limit(), 15);
        assert_relative_eq!(bounds.error_threshold(), DEFAULT_ERROR_THRESHOLD);
    }

    #[test]
    fn rejects_zero_max_value() {
        assert_eq!(
            SearchBounds::new(0, [2]),
            Err(BoundsError::MaxValue(ConstraintError::Zero))
        );
    }

    #[test]
    fn rejects_zero_exponent() {
        assert_eq!(
            SearchBounds::new(10, [2, 0]),
            Err(BoundsError::Exponent {
                n: 0,
                source: ConstraintError::Zero
            })
        );
    }

    #[test]
    fn rejects_empty_exponents() {
        assert_eq!(SearchBounds::new(10, []), Err(BoundsError::NoExponents));
    }

    #[test]
    fn threshold_must_be_in_left_open_unit_interval() {
        let bounds = SearchBounds::new(10, [3]).unwrap();
        assert!(bounds.clone().with_error_threshold(1.0).is_ok());
        assert!(matches!(
            bounds.clone().with_error_threshold(0.0),
            Err(BoundsError::Threshold { .. })
        ));
        assert!(matches!(
            bounds.with_error_threshold(f64::NAN),
            Err(BoundsError::Threshold { .. })
        ));
    }

    #[test]
    fn grid_limit_override() {
        let bounds = SearchBounds::new(100, [2]).unwrap().with_grid_limit(12).unwrap();
        assert_eq!(bounds.batch_limit(), 12);
        assert!(SearchBounds::new(100, [2]).unwrap().with_grid_limit(0).is_err());
    }

    #[cfg(feature = "serde-derive")]
    mod serde_format {
        use super::*;

        #[test]
        fn toml_with_defaults() {
            let bounds: SearchBounds = toml::from_str("max_value = 50\nn_values = [2, 3, 4, 5]\n")
                .expect("valid config");
            assert_eq!(bounds, SearchBounds::new(50, [2, 3, 4, 5]).unwrap());
        }

        #[test]
        fn json_rejects_invalid_threshold() {
            let result = serde_json::from_str::<SearchBounds>(
                r#"{"max_value": 10, "n_values": [3], "error_threshold": 1.5}"#,
            );
            assert!(result.is_err());
        }

        #[test]
        fn json_round_trip_keeps_overrides() {
            let bounds = SearchBounds::new(20, [3])
                .unwrap()
                .with_error_threshold(0.05)
                .unwrap();
            let text = serde_json::to_string(&bounds).unwrap();
            let parsed: SearchBounds = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, bounds);
        }
    }
}
