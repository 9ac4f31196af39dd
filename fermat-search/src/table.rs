use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    str::FromStr,
};

use fermat_core::EvaluatedTriple;
use thiserror::Error;

/// Number of rows reported by [`ResultTable::best`] when no count is given.
pub const DEFAULT_BEST_K: usize = 100;

/// Indicates whether a table covers the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every pair in the grid was visited.
    Complete,
    /// An observer stopped the grid scan early.
    StoppedByObserver,
}

/// A named column of a [`ResultTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    A,
    B,
    C,
    Error,
    RelativeError,
    N,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::A,
        Column::B,
        Column::C,
        Column::Error,
        Column::RelativeError,
        Column::N,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Column::A => "a",
            Column::B => "b",
            Column::C => "c",
            Column::Error => "error",
            Column::RelativeError => "relative_error",
            Column::N => "n",
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(self, row: &EvaluatedTriple) -> f64 {
        match self {
            Column::A => row.a() as f64,
            Column::B => row.b() as f64,
            Column::C => row.c() as f64,
            Column::Error => row.error_f64(),
            Column::RelativeError => row.relative_error(),
            Column::N => f64::from(row.n()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown column name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column `{0}`")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == s)
            .ok_or_else(|| UnknownColumn(s.to_owned()))
    }
}

/// Rows found for one exponent, at most one per `(a, b)` pair.
///
/// Tables are immutable once built; ranking helpers return new collections.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    n: u32,
    rows: Vec<EvaluatedTriple>,
    status: Status,
}

impl ResultTable {
    /// Merges grid approximations with independently found exact solutions.
    ///
    /// Approximation rows keep their order. An exact row is appended only if
    /// its `(a, b)` pair has no row yet. A pair with an integer root always
    /// gets that root from the grid, so both paths agree on `c` for it.
    #[must_use]
    pub fn merge(
        n: u32,
        approximations: Vec<EvaluatedTriple>,
        exact: Vec<EvaluatedTriple>,
        status: Status,
    ) -> Self {
        let mut seen: HashSet<(u64, u64)> = approximations
            .iter()
            .map(|row| row.triple().pair())
            .collect();

        let mut rows = approximations;
        rows.extend(
            exact
                .into_iter()
                .filter(|row| seen.insert(row.triple().pair())),
        );
        debug_assert!(rows.iter().all(|row| row.n() == n));

        Self { n, rows, status }
    }

    /// Exponent shared by every row.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> &[EvaluatedTriple] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluatedTriple> {
        self.rows.iter()
    }

    /// Number of rows with zero error.
    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_exact()).count()
    }

    /// Returns one column as floats, in row order.
    #[must_use]
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.rows.iter().map(|row| column.value(row)).collect()
    }

    /// Returns the rows ordered by ascending relative error.
    ///
    /// The sort is stable, so equal errors keep their table order.
    #[must_use]
    pub fn sorted_by_relative_error(&self) -> Vec<&EvaluatedTriple> {
        let mut sorted: Vec<_> = self.rows.iter().collect();
        sorted.sort_by(|x, y| x.relative_error().total_cmp(&y.relative_error()));
        sorted
    }

    /// Returns the `k` rows with the smallest relative error.
    #[must_use]
    pub fn best(&self, k: usize) -> Vec<&EvaluatedTriple> {
        let mut sorted = self.sorted_by_relative_error();
        sorted.truncate(k);
        sorted
    }

    /// Summarizes the table for reporting.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            n: self.n,
            rows: self.len(),
            exact: self.exact_count(),
            best_relative_error: self
                .rows
                .iter()
                .map(EvaluatedTriple::relative_error)
                .min_by(f64::total_cmp),
            status: self.status,
        }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a EvaluatedTriple;
    type IntoIter = std::slice::Iter<'a, EvaluatedTriple>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Row counts for one exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub n: u32,
    pub rows: usize,
    pub exact: usize,
    /// Smallest relative error in the table, if it has rows.
    pub best_relative_error: Option<f64>,
    pub status: Status,
}

/// One [`ResultTable`] per exponent, ordered by exponent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    tables: BTreeMap<u32, ResultTable>,
}

impl SearchResults {
    pub(crate) fn insert(&mut self, table: ResultTable) {
        self.tables.insert(table.n(), table);
    }

    #[must_use]
    pub fn get(&self, n: u32) -> Option<&ResultTable> {
        self.tables.get(&n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn exponents(&self) -> impl Iterator<Item = u32> + '_ {
        self.tables.keys().copied()
    }

    pub fn tables(&self) -> impl Iterator<Item = &ResultTable> {
        self.tables.values()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<Summary> {
        self.tables.values().map(ResultTable::summary).collect()
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<u32, ResultTable> {
        self.tables
    }
}
