use fermat_core::{EvaluatedTriple, Triple};
use num_integer::Roots;

/// Finds every Pythagorean triple with `a ≤ b` and `c ≤ max_value`.
///
/// No floating point is involved: `c` is the integer square root of
/// `a² + b²` and the triple is accepted only if `c²` reproduces the sum.
/// Non-primitive triples are included. Rows are ordered by `(a, b)`.
#[must_use]
pub fn find_exact_solutions(max_value: u64) -> Vec<EvaluatedTriple> {
    let limit = u128::from(max_value);
    let mut rows = Vec::new();

    for a in 1..=max_value {
        let a_squared = u128::from(a) * u128::from(a);
        for b in a..=max_value {
            let c_squared = a_squared + u128::from(b) * u128::from(b);
            let c = c_squared.sqrt();

            // c only grows with b.
            if c > limit {
                break;
            }
            if c * c != c_squared {
                continue;
            }

            let Ok(c) = u64::try_from(c) else { break };
            if let Ok(triple) = Triple::new(a, b, c, 2) {
                rows.push(EvaluatedTriple::exact(triple));
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_small_triples_in_order() {
        let found: Vec<_> = find_exact_solutions(15)
            .iter()
            .map(|row| (row.a(), row.b(), row.c()))
            .collect();
        assert_eq!(found, vec![(3, 4, 5), (5, 12, 13), (6, 8, 10), (9, 12, 15)]);
    }

    #[test]
    fn includes_non_primitive_triples() {
        let rows = find_exact_solutions(30);
        assert!(rows.iter().any(|row| (row.a(), row.b(), row.c()) == (15, 20, 25)));
        assert!(rows.iter().any(|row| !row.triple().is_primitive()));
    }

    #[test]
    fn respects_bound_on_c() {
        // (3, 4, 5) needs c = 5.
        assert!(find_exact_solutions(4).is_empty());
        assert_eq!(find_exact_solutions(5).len(), 1);
    }

    #[test]
    fn rows_are_exact_and_ordered_by_pair() {
        for row in find_exact_solutions(50) {
            assert!(row.is_exact());
            assert_eq!(row.n(), 2);
            assert!(row.a() <= row.b());
            assert!(row.b() < row.c());
            assert_eq!(row.a() * row.a() + row.b() * row.b(), row.c() * row.c());
        }
    }

    #[test]
    fn zero_bound_is_empty() {
        assert!(find_exact_solutions(0).is_empty());
    }
}
