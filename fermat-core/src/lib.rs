//! Core types for exploring how closely integer triples satisfy `a^n + b^n = c^n`.
//!
//! This crate defines the shared pieces the search engine builds on:
//!
//! - [`Triple`], [`EvaluatedTriple`]: candidate triples and their deviation
//! - [`metric`]: exact absolute and relative error computations
//! - [`SearchBounds`]: validated configuration for one search run
//! - [`Observer`]: hook called for every scanned `(a, b)` pair
//! - [`constraint`]: numeric invariants checked at construction

pub mod constraint;
pub mod metric;

mod bounds;
mod observer;
mod triple;

pub use bounds::{BoundsError, DEFAULT_ERROR_THRESHOLD, DEFAULT_GRID_LIMIT, SearchBounds};
pub use metric::MetricError;
pub use observer::Observer;
pub use triple::{EvaluatedTriple, Triple, TripleError};

pub use num_bigint::BigUint;
