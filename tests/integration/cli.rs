//! Runs the `fieldfinder` binary against the fixture sheet.

use std::process::{Command, Output};

use super::common::{write_sheet, CANONICAL_QUESTION, FIXTURE_CSV};

fn run_fieldfinder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldfinder"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fieldfinder")
}

#[test]
fn test_search_prints_top_matches_and_best_answer() {
    let output = run_fieldfinder(&["search", FIXTURE_CSV, CANONICAL_QUESTION]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Top matches"));
    assert!(stdout.contains("AGENCY_MASTER.DLV_ZONE"));
    assert!(stdout.contains("Delivery Zone | Agency Master"));
    assert!(!stdout.contains("\x1b["), "NO_COLOR output contains escapes");
}

#[test]
fn test_search_explain() {
    let output = run_fieldfinder(&["search", FIXTURE_CSV, CANONICAL_QUESTION, "--explain", "-k", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("syn_phrase_hit=9"));
    assert!(!stdout.contains("Agency Phone"));
}

#[test]
fn test_search_json() {
    let output = run_fieldfinder(&["search", FIXTURE_CSV, CANONICAL_QUESTION, "--json", "-k", "2"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["row"]["Common"], "Delivery Zone");
    assert_eq!(results[0]["score"], 19);
    assert_eq!(results[0]["explanation"]["syn_phrase_hit"], 9);
    assert_eq!(results[0]["explanation"]["hinted_entity"], "agency");
}

#[test]
fn test_search_limit_out_of_range() {
    let output = run_fieldfinder(&["search", FIXTURE_CSV, "agency", "-k", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_search_missing_columns_fails() {
    let (_dir, path) = write_sheet("Common\nDelivery Zone\n", "csv");
    let output = run_fieldfinder(&["search", path.to_str().unwrap(), "agency"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing columns"), "stderr: {}", stderr);
}

#[test]
fn test_inspect_summarizes_entities() {
    let output = run_fieldfinder(&["inspect", FIXTURE_CSV]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows     11"));
    assert!(stdout.contains("agency"));
    assert!(stdout.contains("(none)"));
}
