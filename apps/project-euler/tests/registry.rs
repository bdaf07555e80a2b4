use std::path::PathBuf;

use project_euler::{Config, Error, PROBLEMS, data_file, run_problem};

fn missing_data_dir() -> Config {
    Config::new(Some(PathBuf::from("/nonexistent/project-euler-data")))
}

#[test]
fn problems_are_sorted_and_unique() {
    assert!(PROBLEMS.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(PROBLEMS.len(), 90);
}

#[test]
fn unknown_problem_is_not_implemented() {
    let config = Config::default();
    assert!(run_problem(0, &config).is_none());
    assert!(run_problem(11, &config).is_none());
    assert!(run_problem(1000, &config).is_none());
}

#[test]
fn dispatches_pure_solutions() {
    let config = missing_data_dir();
    let answer = run_problem(1, &config).unwrap().unwrap();
    assert_eq!(answer, "233168");
    assert_eq!(run_problem(18, &config).unwrap().unwrap(), "1074");
}

#[test]
fn data_problems_report_the_missing_file() {
    let config = missing_data_dir();
    for &id in PROBLEMS {
        let Some(file) = data_file(id) else {
            continue;
        };
        match run_problem(id, &config) {
            Some(Err(Error::Io { path, .. })) => {
                assert!(path.ends_with(file), "problem {} read {}", id, path.display());
            }
            other => panic!("problem {} should fail to read {}: {:?}", id, file, other),
        }
    }
}

#[test]
fn io_error_names_the_file() {
    let config = missing_data_dir();
    let Some(Err(err)) = run_problem(22, &config) else {
        panic!("problem 22 should need names.txt");
    };
    assert!(err.to_string().contains("names.txt"), "{}", err);
}

#[test]
fn every_problem_without_data_is_dispatched() {
    let config = missing_data_dir();
    // Only the fast ones; the full set runs in each solution's own tests.
    for id in [2, 5, 6, 15, 16, 20, 25, 40, 57, 63, 65, 97] {
        assert!(data_file(id).is_none());
        assert!(matches!(run_problem(id, &config), Some(Ok(_))), "problem {}", id);
    }
}
