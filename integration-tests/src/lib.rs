//! Shared fixtures for the cross-crate tests.

use fermat_core::{EvaluatedTriple, SearchBounds, Triple};

/// Builds bounds that are known to be valid.
///
/// # Panics
///
/// Panics if the arguments are rejected by [`SearchBounds::new`].
#[must_use]
pub fn bounds(max_value: u64, n_values: impl IntoIterator<Item = u32>) -> SearchBounds {
    SearchBounds::new(max_value, n_values).expect("fixture bounds are valid")
}

/// Finds the best `c` in `[1, max_value]` for `(a, b, n)` by trying every value.
///
/// Ties go to the smaller `c`. Used as a float-free reference for the
/// bracketing search on small grids.
///
/// # Panics
///
/// Panics if `a`, `b`, `n`, or `max_value` is zero.
#[must_use]
pub fn exhaustive_best(a: u64, b: u64, n: u32, max_value: u64) -> EvaluatedTriple {
    (1..=max_value)
        .map(|c| Triple::new(a, b, c, n).expect("non-zero fixture").evaluate())
        .reduce(|best, row| {
            if row.absolute_error() < best.absolute_error() {
                row
            } else {
                best
            }
        })
        .expect("max_value is at least one")
}

/// Formats a row as `(a, b, c)` for readable assertion messages.
#[must_use]
pub fn key(row: &EvaluatedTriple) -> (u64, u64, u64) {
    (row.a(), row.b(), row.c())
}
