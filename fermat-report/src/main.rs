//! Runs a bounded search and reports exact and near-solutions per exponent.
//!
//! Usage:
//!   fermat-report --config fermat-report/fermat.toml
//!   fermat-report --max-value 50 --n 2 --n 3 --top 10
//!   fermat-report --max-value 15 --n 3 --near

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fermat_core::SearchBounds;
use fermat_search::{DEFAULT_BEST_K, ResultTable, find_near_solutions, generate};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fermat-report")]
#[command(about = "Report how closely integer triples satisfy a^n + b^n = c^n")]
#[command(version)]
struct Args {
    /// Path to a TOML file with `max_value`, `n_values`, and optional
    /// `error_threshold` and `grid_limit`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upper bound for a, b, and c
    #[arg(long)]
    max_value: Option<u64>,

    /// Exponent to evaluate (repeatable)
    #[arg(long = "n")]
    n_values: Vec<u32>,

    /// Relative-error threshold in (0, 1]
    #[arg(long)]
    threshold: Option<f64>,

    /// Number of best rows to print per exponent
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Run the full-grid near-solution search instead of batch generation
    #[arg(long)]
    near: bool,
}

const DEFAULT_MAX_VALUE: u64 = 50;
const DEFAULT_N_VALUES: [u32; 4] = [2, 3, 4, 5];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let bounds = load_bounds(&args)?;
    info!(
        max_value = bounds.max_value(),
        n_values = ?bounds.n_values().collect::<Vec<_>>(),
        error_threshold = bounds.error_threshold(),
        "search bounds loaded"
    );

    if args.near {
        report_near(&bounds, args.top)
    } else {
        report_batch(&bounds, args.top);
        Ok(())
    }
}

/// Reads the config file, if any, and applies command-line overrides.
fn load_bounds(args: &Args) -> Result<SearchBounds> {
    let base = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str::<SearchBounds>(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SearchBounds::new(DEFAULT_MAX_VALUE, DEFAULT_N_VALUES)?,
    };

    let mut bounds = if args.max_value.is_some() || !args.n_values.is_empty() {
        let max_value = args.max_value.unwrap_or(base.max_value());
        let overridden = if args.n_values.is_empty() {
            SearchBounds::new(max_value, base.n_values())
        } else {
            SearchBounds::new(max_value, args.n_values.iter().copied())
        };
        overridden
            .context("invalid search bounds")?
            .with_error_threshold(base.error_threshold())?
            .with_grid_limit(base.grid_limit())?
    } else {
        base
    };

    if let Some(threshold) = args.threshold {
        bounds = bounds
            .with_error_threshold(threshold)
            .context("invalid threshold")?;
    }
    Ok(bounds)
}

fn report_batch(bounds: &SearchBounds, top: usize) {
    let results = generate(bounds);

    for table in results.tables() {
        let summary = table.summary();
        println!(
            "n = {}: {} rows, {} exact{}",
            summary.n,
            summary.rows,
            summary.exact,
            summary
                .best_relative_error
                .map(|e| format!(", best relative error {e:.3e}"))
                .unwrap_or_default()
        );
        print_best(table, top.min(DEFAULT_BEST_K));
    }
}

fn print_best(table: &ResultTable, top: usize) {
    for row in table.best(top) {
        println!(
            "  {:>4}^{n} + {:>4}^{n} ~ {:>4}^{n}  error {}  relative {:.3e}{}",
            row.a(),
            row.b(),
            row.c(),
            row.absolute_error(),
            row.relative_error(),
            if row.is_exact() { "  exact" } else { "" },
            n = row.n(),
        );
    }
}

fn report_near(bounds: &SearchBounds, top: usize) -> Result<()> {
    for n in bounds.n_values() {
        let mut found = find_near_solutions(bounds.max_value(), n, bounds.error_threshold())
            .with_context(|| format!("near-solution search failed for n = {n}"))?;
        found.sort_by(|x, y| x.relative_error().total_cmp(&y.relative_error()));

        println!("n = {n}: {} candidates within threshold", found.len());
        for row in found.iter().take(top) {
            println!(
                "  ({}, {}, {})  relative {:.3e}",
                row.a(),
                row.b(),
                row.c(),
                row.relative_error()
            );
        }
    }
    Ok(())
}
