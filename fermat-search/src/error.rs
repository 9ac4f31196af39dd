use fermat_core::{BoundsError, constraint::ConstraintError};
use thiserror::Error;

/// Errors that can occur before a search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid search bound")]
    InvalidBound(#[from] BoundsError),

    #[error("invalid error threshold {threshold}")]
    InvalidThreshold {
        threshold: f64,
        #[source]
        source: ConstraintError,
    },
}
