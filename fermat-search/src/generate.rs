use fermat_core::{EvaluatedTriple, Observer, SearchBounds};
use tracing::{debug, info};

use crate::{
    Bracket,
    exact::find_exact_solutions,
    select::{SelectError, select_best},
    table::{ResultTable, SearchResults, Status},
};

/// Control actions supported by batch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning the grid for the current exponent.
    StopEarly,
}

/// What batch generation decided for one `(a, b)` pair.
#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// The selected row was kept.
    Accepted(&'a EvaluatedTriple),
    /// The selected row exceeded the relative-error threshold.
    Rejected(&'a EvaluatedTriple),
    /// Neither bracket candidate is positive.
    NoValidCandidate,
}

/// Event emitted once per visited `(a, b)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub n: u32,
    pub a: u64,
    pub b: u64,
    /// Integer neighbours of the real root of `a^n + b^n`.
    pub bracket: Bracket,
    pub outcome: Outcome<'a>,
}

/// Builds one result table per configured exponent.
///
/// For each `(a, b)` in `[1, batch_limit]²` the better bracket candidate is
/// kept, even when its `c` exceeds `max_value`; for `n > 2` rows above the
/// error threshold are dropped. For `n = 2` the table also receives every
/// exact solution up to `max_value`.
#[must_use]
pub fn generate(bounds: &SearchBounds) -> SearchResults {
    generate_observed(bounds, ())
}

/// Builds one result table per configured exponent, reporting each pair.
///
/// The observer is shared across exponents. A [`Action::StopEarly`] ends the
/// grid scan of the current exponent only; its table is marked
/// [`Status::StoppedByObserver`] and the next exponent starts normally.
pub fn generate_observed<Obs>(bounds: &SearchBounds, mut observer: Obs) -> SearchResults
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut results = SearchResults::default();
    for n in bounds.n_values() {
        results.insert(build_table(bounds, n, &mut observer));
    }
    results
}

/// Builds the result table for a single exponent.
#[must_use]
pub fn generate_table(bounds: &SearchBounds, n: u32) -> ResultTable {
    generate_table_observed(bounds, n, ())
}

/// Builds the result table for a single exponent, reporting each pair.
pub fn generate_table_observed<Obs>(bounds: &SearchBounds, n: u32, mut observer: Obs) -> ResultTable
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    build_table(bounds, n, &mut observer)
}

fn build_table<Obs>(bounds: &SearchBounds, n: u32, observer: &mut Obs) -> ResultTable
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    debug!(n, limit = bounds.batch_limit(), "generating result table");

    let (approximations, status) = scan_grid(bounds, n, observer);
    let exact = if n == 2 {
        find_exact_solutions(bounds.max_value())
    } else {
        Vec::new()
    };
    let table = ResultTable::merge(n, approximations, exact, status);

    info!(
        n,
        rows = table.len(),
        exact = table.exact_count(),
        "result table ready"
    );
    table
}

fn scan_grid<Obs>(
    bounds: &SearchBounds,
    n: u32,
    observer: &mut Obs,
) -> (Vec<EvaluatedTriple>, Status)
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let limit = bounds.batch_limit();
    let threshold = bounds.error_threshold();
    let mut rows = Vec::new();

    for a in 1..=limit {
        for b in 1..=limit {
            let bracket = Bracket::around(a, b, n);
            // Only max_value caps a and b here; c just has to be positive.
            let selected = select_best(a, b, n, &bracket.candidates(), u64::MAX);

            let outcome = match &selected {
                Ok(row) if n > 2 && row.relative_error() > threshold => Outcome::Rejected(row),
                Ok(row) => Outcome::Accepted(row),
                Err(SelectError::NoValidCandidate { .. }) => Outcome::NoValidCandidate,
            };
            let keep = matches!(outcome, Outcome::Accepted(_));
            let event = Event {
                n,
                a,
                b,
                bracket,
                outcome,
            };
            let action = Obs::observe(observer, &event);

            if keep && let Ok(row) = selected {
                rows.push(row);
            }

            if let Some(Action::StopEarly) = action {
                debug!(n, a, b, "grid scan stopped by observer");
                return (rows, Status::StoppedByObserver);
            }
        }
    }

    (rows, Status::Complete)
}
