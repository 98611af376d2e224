// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Row;

/// Create a row from the fields the scorer reads.
///
/// `full_key` and `canonical_field` are derived from `keyword` so results
/// still render sensibly.
pub fn make_row(common: &str, keyword: &str, report: &str, entity: &str, synonyms: &str) -> Row {
    Row {
        common: common.to_string(),
        keyword: keyword.to_string(),
        report: report.to_string(),
        full_key: format!("{}.{}", report, keyword),
        entity: entity.to_string(),
        canonical_field: keyword.to_lowercase(),
        synonyms: synonyms.to_string(),
    }
}

/// Create a row with only a label and entity tag.
pub fn make_row_simple(common: &str, entity: &str) -> Row {
    make_row(common, "", "", entity, "")
}

/// A small sheet covering every entity hint group.
///
/// Row 0 is the canonical "agency delivery zone" answer.
pub fn sample_sheet() -> Vec<Row> {
    vec![
        make_row(
            "Delivery Zone",
            "DLV_ZONE",
            "Agency Master",
            "agency",
            "delivery zone, zone code, route zone",
        ),
        make_row(
            "Agency Phone",
            "PHONE",
            "Agency Master",
            "agency",
            "agency phone, agency contact number",
        ),
        make_row(
            "Donor Name",
            "DONOR_NAME",
            "Donor Report",
            "donors",
            "donor name, who donated",
        ),
        make_row(
            "Vendor Terms",
            "PAY_TERMS",
            "Vendor Ledger",
            "vendors",
            "payment terms, supplier terms",
        ),
        make_row(
            "Item SKU",
            "SKU",
            "Item Master",
            "items",
            "sku, product code",
        ),
        make_row(
            "GL Account",
            "GL_ACCT",
            "General Ledger",
            "ledger",
            "gl account, account number",
        ),
    ]
}
