use approx::assert_relative_eq;
use fermat_core::{DEFAULT_GRID_LIMIT, SearchBounds};
use fermat_search::generate;

const SAMPLE_CONFIG: &str = include_str!("../../fermat-report/fermat.toml");

#[test]
fn sample_config_parses() {
    let bounds: SearchBounds = toml::from_str(SAMPLE_CONFIG).expect("sample config is valid");

    assert_eq!(bounds.max_value(), 50);
    assert_eq!(bounds.n_values().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    assert_relative_eq!(bounds.error_threshold(), 0.1);
    assert_eq!(bounds.grid_limit(), DEFAULT_GRID_LIMIT);
}

#[test]
fn config_drives_search() {
    let bounds: SearchBounds = toml::from_str(
        r"
        max_value = 15
        n_values = [3, 2]
        error_threshold = 0.05
        grid_limit = 8
        ",
    )
    .expect("valid config");

    let results = generate(&bounds);
    assert_eq!(results.exponents().collect::<Vec<_>>(), vec![2, 3]);

    let cubes = results.get(3).expect("table for n = 3");
    assert!(cubes.iter().all(|row| row.relative_error() <= 0.05));
    assert!(cubes.iter().all(|row| row.a() <= 8 && row.b() <= 8));

    // Exact solutions are still found beyond the grid limit.
    let squares = results.get(2).expect("table for n = 2");
    assert!(squares.iter().any(|row| (row.a(), row.b(), row.c()) == (9, 12, 15)));
    assert!(squares.iter().any(|row| (row.a(), row.b(), row.c()) == (6, 8, 10)));
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        r#"{"max_value": 0, "n_values": [2]}"#,
        r#"{"max_value": 10, "n_values": []}"#,
        r#"{"max_value": 10, "n_values": [0, 3]}"#,
        r#"{"max_value": 10, "n_values": [3], "error_threshold": 0.0}"#,
        r#"{"max_value": 10, "n_values": [3], "grid_limit": 0}"#,
        r#"{"max_value": 10, "n_values": [3], "unknown": true}"#,
        r#"{"max_value": -5, "n_values": [3]}"#,
    ];

    for case in cases {
        assert!(
            serde_json::from_str::<SearchBounds>(case).is_err(),
            "accepted invalid config {case}"
        );
    }
}
