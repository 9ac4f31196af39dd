use std::collections::HashSet;

use fermat_core::metric;
use fermat_search::{find_exact_solutions, find_near_solutions, generate, generate_table};
use integration_tests::{bounds, key};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Raising the threshold never drops a previously found triple.
    #[test]
    fn near_search_is_monotone_in_threshold(
        max_value in 1u64..20,
        n in 1u32..7,
        low in 0.001f64..1.0,
        extra in 0.0f64..1.0,
    ) {
        let high = (low + extra).min(1.0);
        let narrow: HashSet<_> = find_near_solutions(max_value, n, low)
            .expect("valid inputs")
            .iter()
            .map(key)
            .collect();
        let wide: HashSet<_> = find_near_solutions(max_value, n, high)
            .expect("valid inputs")
            .iter()
            .map(key)
            .collect();

        prop_assert!(narrow.is_subset(&wide));
    }

    /// Every near-solution passes the threshold when re-checked from scratch.
    #[test]
    fn near_rows_pass_threshold(
        max_value in 1u64..20,
        n in 1u32..7,
        threshold in 0.001f64..=1.0,
    ) {
        for row in find_near_solutions(max_value, n, threshold).expect("valid inputs") {
            let relative = metric::relative_error(row.a(), row.b(), row.c(), row.n())
                .expect("c is positive");
            prop_assert!(relative <= threshold);
            prop_assert!(row.c() <= max_value);
        }
    }

    /// Batch rows for n > 2 stay within the configured threshold.
    #[test]
    fn batch_rows_respect_threshold(
        max_value in 1u64..40,
        n in 3u32..8,
        threshold in 0.001f64..=1.0,
    ) {
        let bounds = bounds(max_value, [n])
            .with_error_threshold(threshold)
            .expect("threshold in range");
        for row in &generate_table(&bounds, n) {
            prop_assert!(row.relative_error() >= 0.0);
            prop_assert!(row.relative_error() <= threshold);
            prop_assert!(row.a() <= bounds.batch_limit());
            prop_assert!(row.b() <= bounds.batch_limit());
        }
    }

    /// Exact solutions satisfy the equation in integer arithmetic.
    #[test]
    fn exact_rows_are_pythagorean(max_value in 1u64..120) {
        for row in find_exact_solutions(max_value) {
            let (a, b, c) = (row.a(), row.b(), row.c());
            prop_assert_eq!(a * a + b * b, c * c);
            prop_assert!(a < c && b < c);
            prop_assert!(c <= max_value);
        }
    }

    /// Batch generation is a pure function of its bounds.
    #[test]
    fn batch_generation_is_idempotent(
        max_value in 1u64..25,
        n_values in prop::collection::vec(1u32..6, 1..4),
    ) {
        let bounds = bounds(max_value, n_values);
        prop_assert_eq!(generate(&bounds), generate(&bounds));
    }
}
