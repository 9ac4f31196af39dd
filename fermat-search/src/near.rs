use fermat_core::{
    BoundsError, EvaluatedTriple, Triple,
    constraint::{StrictlyPositive, UnitIntervalLeftOpen},
};
use tracing::debug;

use crate::{Bracket, Error};

/// Lists every bracket candidate within `error_threshold` of a solution.
///
/// Unlike batch generation this scans the full `[1, max_value]²` grid and
/// keeps each passing candidate, so both neighbours of one `(a, b)` pair can
/// appear. Candidates with `c = 0` or `c > max_value` are skipped. Rows are
/// ordered by `(a, b)` and then by `c`.
///
/// # Errors
///
/// Returns [`Error::InvalidBound`] if `max_value` or `n` is zero, and
/// [`Error::InvalidThreshold`] unless `0 < error_threshold ≤ 1`.
pub fn find_near_solutions(
    max_value: u64,
    n: u32,
    error_threshold: f64,
) -> Result<Vec<EvaluatedTriple>, Error> {
    let max_value = StrictlyPositive::new(max_value)
        .map_err(BoundsError::MaxValue)?
        .get();
    StrictlyPositive::new(n).map_err(|source| BoundsError::Exponent { n, source })?;
    UnitIntervalLeftOpen::new(error_threshold).map_err(|source| Error::InvalidThreshold {
        threshold: error_threshold,
        source,
    })?;

    let mut found = Vec::new();
    for a in 1..=max_value {
        for b in 1..=max_value {
            for c in Bracket::around(a, b, n).candidates() {
                if c > max_value {
                    continue;
                }
                let Ok(triple) = Triple::new(a, b, c, n) else {
                    continue;
                };
                let row = triple.evaluate();
                if row.relative_error() <= error_threshold {
                    found.push(row);
                }
            }
        }
    }

    debug!(
        n,
        max_value,
        error_threshold,
        found = found.len(),
        "near-solution search finished"
    );
    Ok(found)
}
