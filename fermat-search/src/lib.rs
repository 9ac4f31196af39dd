//! Bounded search for exact and near-solutions of `a^n + b^n = c^n`.
//!
//! Two inclusion policies are provided:
//!
//! - [`generate`] keeps the better of the two bracket candidates per `(a, b)`
//!   pair on a capped grid, filters `n > 2` rows by relative error, and adds
//!   every Pythagorean triple for `n = 2`.
//! - [`find_near_solutions`] scans the full grid and keeps every candidate
//!   within the threshold.
//!
//! Both compute the real root once through [`Bracket`] and verify its integer
//! neighbours with exact big-integer arithmetic.

mod bracket;
mod error;
mod exact;
mod generate;
mod near;
mod select;
mod table;

pub use bracket::{Bracket, real_root};
pub use error::Error;
pub use exact::find_exact_solutions;
pub use generate::{
    Action, Event, Outcome, generate, generate_observed, generate_table, generate_table_observed,
};
pub use near::find_near_solutions;
pub use select::{SelectError, select_best};
pub use table::{Column, DEFAULT_BEST_K, ResultTable, SearchResults, Status, Summary, UnknownColumn};
