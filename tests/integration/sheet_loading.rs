//! Loading sheets from disk and searching them.

use std::path::Path;

use super::common::{
    assert_ranked, labels, row_named, write_sheet, CANONICAL_QUESTION, CSV_HEADER, FIXTURE_CSV,
};
use fieldfinder::{load_sheet, rank, Error, REQUIRED_COLUMNS};

// ============================================================================
// FIXTURE-BASED TESTS
// ============================================================================

#[test]
fn test_fixture_loads() {
    let rows = load_sheet(Path::new(FIXTURE_CSV)).unwrap();
    assert_eq!(rows.len(), 11);

    let zone = row_named(&rows, "Delivery Zone");
    assert_eq!(zone.full_key, "AGENCY_MASTER.DLV_ZONE");
    assert_eq!(zone.synonyms, "delivery zone, zone code, route zone");

    let warehouse = row_named(&rows, "Warehouse Code");
    assert_eq!(warehouse.entity, "");
    assert_eq!(warehouse.synonyms, "");
}

#[test]
fn test_fixture_canonical_question() {
    let rows = load_sheet(Path::new(FIXTURE_CSV)).unwrap();
    let results = rank(CANONICAL_QUESTION, &rows, 3).unwrap();
    assert_eq!(
        labels(&results),
        vec!["Delivery Zone", "Agency Phone", "Agency Status"]
    );
    assert_ranked(&results);
}

#[test]
fn test_fixture_ledger_question() {
    let rows = load_sheet(Path::new(FIXTURE_CSV)).unwrap();
    let results = rank("which report has the journal posting date?", &rows, 2).unwrap();
    assert_eq!(results[0].row.common, "Journal Date");
    assert_eq!(results[0].explanation.matched_phrase.as_deref(), Some("posting date"));
}

// ============================================================================
// TEMP FILE TESTS
// ============================================================================

#[test]
fn test_load_json_sheet() {
    let json = r#"[
        {"Common": "Item SKU", "Keyword / Search Term": "SKU",
         "Database/Report Location": "Item Master", "Full Information Key": "ITEM.SKU",
         "Entity Type": "items", "Canonical Field": "sku",
         "Synonyms / Ask Phrases": "sku, product code"}
    ]"#;
    let (_dir, path) = write_sheet(json, "json");
    let rows = load_sheet(&path).unwrap();
    let results = rank("product code lookup", &rows, 1).unwrap();
    assert_eq!(results[0].row.common, "Item SKU");
    assert_eq!(results[0].score, 9 + 4);
}

#[test]
fn test_load_reports_every_missing_column() {
    let (_dir, path) = write_sheet("Common,Notes\nDelivery Zone,x\n", "csv");
    match load_sheet(&path) {
        Err(Error::MissingColumns(missing)) => {
            assert_eq!(missing.len(), REQUIRED_COLUMNS.len() - 1);
            assert!(!missing.contains(&"Common".to_string()));
        }
        other => panic!("Expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_load_header_with_padding() {
    let padded = CSV_HEADER.replace(',', " , ");
    let (_dir, path) = write_sheet(&format!("{}\nA,B,C,D,agency,F,G\n", padded), "csv");
    let rows = load_sheet(&path).unwrap();
    assert_eq!(rows[0].entity, "agency");
}

#[test]
fn test_load_unsupported_extension() {
    let (_dir, path) = write_sheet(CSV_HEADER, "xlsx");
    assert!(matches!(load_sheet(&path), Err(Error::UnsupportedFormat(_))));
}

#[test]
fn test_load_missing_file() {
    let err = load_sheet(Path::new("tests/fixtures/does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_header_only_sheet_searches_empty() {
    let (_dir, path) = write_sheet(&format!("{}\n", CSV_HEADER), "csv");
    let rows = load_sheet(&path).unwrap();
    assert!(rank("agency", &rows, 3).unwrap().is_empty());
}
