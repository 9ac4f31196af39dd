use fermat_core::{EvaluatedTriple, Triple};
use thiserror::Error;

/// Errors that can occur when selecting among candidates.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// No candidate lies in `(0, max_value]`.
    #[error("no valid candidate for ({a}, {b}) with n = {n}")]
    NoValidCandidate { a: u64, b: u64, n: u32 },
}

/// Returns the candidate `c` with the smallest absolute error.
///
/// Candidates outside `(0, max_value]` are skipped.
/// On ties the earlier candidate wins, so passing a [`Bracket`]'s candidates
/// prefers `c_low`.
///
/// # Errors
///
/// Returns [`SelectError::NoValidCandidate`] if every candidate is invalid.
///
/// [`Bracket`]: crate::Bracket
pub fn select_best(
    a: u64,
    b: u64,
    n: u32,
    candidates: &[u64],
    max_value: u64,
) -> Result<EvaluatedTriple, SelectError> {
    let mut best = Best::empty();

    for &c in candidates {
        if c > max_value {
            continue;
        }
        if let Ok(triple) = Triple::new(a, b, c, n) {
            best.update(triple.evaluate());
        }
    }

    best.finish()
        .ok_or(SelectError::NoValidCandidate { a, b, n })
}

/// Tracks the best evaluation encountered so far.
///
/// The best evaluation is defined by minimum absolute error.
/// The `Option` lets us represent the state before any valid candidate.
struct Best {
    row: Option<EvaluatedTriple>,
}

impl Best {
    fn empty() -> Self {
        Self { row: None }
    }

    /// Replaces the stored row only on a strict improvement.
    fn update(&mut self, row: EvaluatedTriple) {
        if let Some(best) = self.row.as_ref()
            && row.absolute_error() >= best.absolute_error()
        {
            return;
        }
        self.row = Some(row);
    }

    fn finish(self) -> Option<EvaluatedTriple> {
        self.row
    }
}
