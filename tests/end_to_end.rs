//! File-to-file extraction tests covering the observable contract:
//! idempotence, order preservation, block exclusion, field fidelity, and the
//! reported-count / row-count agreement.

use runlog_extract::{DELIMITER, ExtractError, extract_file};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_LOG: &str = "\
Initial State: 1 2 3 | h = 5
0.0123 seconds
Nodes expanded: 10
Solution length: 3
Total cost: 7
-----------------------------------------
garbage block
-----------------------------------------
Initial State: 4 5 6 | h = 2
0.5 seconds
Nodes expanded: 100
Solution length: 8
Total cost: 12
";

const SAMPLE_CSV: &str = "\
initial_state,h,time_s,nodes_expanded,solution_length,total_cost
1 2 3,5,0.0123,10,3,7
4 5 6,2,0.5,100,8,12
";

/// Helper: write a log into a temp dir and extract it to `out.csv`.
fn run_extract(dir: &TempDir, log: &str) -> (usize, String) {
    let input = dir.path().join("runs.log");
    let output = dir.path().join("out.csv");
    fs::write(&input, log).unwrap();
    let summary = extract_file(&input, &output).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    (summary.records.len(), content)
}

#[test]
fn test_sample_log_to_exact_csv() {
    let dir = tempfile::tempdir().unwrap();
    let (count, content) = run_extract(&dir, SAMPLE_LOG);
    assert_eq!(count, 2);
    assert_eq!(content, SAMPLE_CSV);
}

#[test]
fn test_idempotent_parse() {
    let dir = tempfile::tempdir().unwrap();
    let (_, first) = run_extract(&dir, SAMPLE_LOG);
    let (_, second) = run_extract(&dir, SAMPLE_LOG);
    assert_eq!(first, second);
}

#[test]
fn test_reported_count_matches_data_rows() {
    let dir = tempfile::tempdir().unwrap();
    let (count, content) = run_extract(&dir, SAMPLE_LOG);
    let data_rows = content.lines().count() - 1;
    assert_eq!(count, data_rows);
}

#[test]
fn test_excluded_block_does_not_shift_neighbors() {
    // Malformed blocks at every position; surviving rows keep their order.
    let good = |state: &str, h: u64| {
        format!(
            "Initial State: {state} | h = {h}\n\
             0.1 seconds\n\
             Nodes expanded: 1\n\
             Solution length: 1\n\
             Total cost: 1"
        )
    };
    let log = [
        "too\nshort".to_string(),
        good("a", 1),
        "Initial State: broken h = 9\nx\nx\nx\nx".to_string(),
        good("b", 2),
        "also garbage".to_string(),
    ]
    .join(&format!("\n{DELIMITER}\n"));

    let dir = tempfile::tempdir().unwrap();
    let (count, content) = run_extract(&dir, &log);
    assert_eq!(count, 2);
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[1].starts_with("a,1,"));
    assert!(lines[2].starts_with("b,2,"));
}

#[test]
fn test_all_blocks_malformed_yields_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let log = format!("nope\n{DELIMITER}\nstill nope\n");
    let (count, content) = run_extract(&dir, &log);
    assert_eq!(count, 0);
    assert_eq!(
        content,
        "initial_state,h,time_s,nodes_expanded,solution_length,total_cost\n"
    );
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.log");
    let output = dir.path().join("out.csv");
    let err = extract_file(&missing, &output).unwrap_err();
    assert!(matches!(err, ExtractError::ReadInput { .. }));
    // No output file is produced when the read fails.
    assert!(!Path::new(&output).exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("runs.log");
    fs::write(&input, SAMPLE_LOG).unwrap();
    // A directory path cannot be opened as the output file.
    let output = dir.path().join("missing-dir").join("out.csv");
    let err = extract_file(&input, &output).unwrap_err();
    assert!(matches!(err, ExtractError::WriteOutput { .. }));
}
