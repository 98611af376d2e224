//! Inputs that must not fail: empty things, odd punctuation, bad top_k.

use super::common::{assert_ranked, make_row_simple, sample_sheet};
use fieldfinder::{rank, Error, Row};

#[test]
fn test_empty_sheet_returns_empty() {
    let results = rank("anything", &[], 5).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_zero_top_k_is_invalid_argument() {
    let rows = sample_sheet();
    match rank("agency", &rows, 0) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("top_k")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
    // Even on an empty sheet
    assert!(rank("agency", &[], 0).is_err());
}

#[test]
fn test_top_k_larger_than_sheet() {
    let rows = sample_sheet();
    let results = rank("agency", &rows, 1000).unwrap();
    assert_eq!(results.len(), rows.len());
}

#[test]
fn test_empty_query_all_zero_in_sheet_order() {
    let rows = sample_sheet();
    let results = rank("", &rows, rows.len()).unwrap();
    assert!(results.iter().all(|r| r.score == 0));
    let positions: Vec<_> = results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (0..rows.len()).collect::<Vec<_>>());
}

#[test]
fn test_punctuation_only_query() {
    let rows = sample_sheet();
    let results = rank("?!?! ... ///", &rows, 3).unwrap();
    assert!(results.iter().all(|r| r.score == 0));
}

#[test]
fn test_all_rows_blank() {
    let rows = vec![Row::default(); 4];
    let results = rank("agency delivery zone", &rows, 4).unwrap();
    // Entity hint fires, no row matches it
    assert!(results.iter().all(|r| r.score == -1));
    assert_ranked(&results);
}

#[test]
fn test_negative_scores_stay_in_sheet_order() {
    let rows = vec![
        make_row_simple("One", "donors"),
        make_row_simple("Two", "agency"),
        make_row_simple("Three", "items"),
        make_row_simple("Four", "donors"),
    ];
    let results = rank("agency", &rows, 4).unwrap();
    let order: Vec<_> = results.iter().map(|r| (r.position, r.score)).collect();
    assert_eq!(order, vec![(1, 4), (0, -1), (2, -1), (3, -1)]);
}

#[test]
fn test_non_ascii_query() {
    let rows = sample_sheet();
    let results = rank("¿Dónde está el código de zona?", &rows, 3).unwrap();
    assert_eq!(results.len(), 3);
    assert_ranked(&results);
}
