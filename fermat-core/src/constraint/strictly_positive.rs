use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Used for the search bound, the grid cap, and every exponent.
///
/// # Examples
///
/// ```
/// use fermat_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
///
/// let bound = StrictlyPositive::new(50_u64).unwrap();
/// assert_eq!(bound.get(), 50);
///
/// assert_eq!(StrictlyPositive::new(0_u32), Err(ConstraintError::Zero));
/// assert!(Constrained::<f64, StrictlyPositive>::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Zero`] if the value equals zero.
    /// - [`ConstraintError::BelowMinimum`] if the value is negative.
    /// - [`ConstraintError::NotANumber`] if the comparison is undefined (NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(StrictlyPositive::new(1_u64).is_ok());
        assert!(StrictlyPositive::new(u32::MAX).is_ok());
        assert_eq!(StrictlyPositive::new(0_u64), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::new(-3_i64),
            Err(ConstraintError::BelowMinimum)
        );
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-9).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
