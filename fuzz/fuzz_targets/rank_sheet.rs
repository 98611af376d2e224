// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking arbitrary sheets.
//!
//! Ranking never panics, never returns more than `top_k` rows, and always
//! comes back sorted by score with ties in sheet order.

#![no_main]

use arbitrary::Arbitrary;
use fieldfinder::{rank, Row};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    top_k: u8,
    rows: Vec<(String, String, String, String, String)>,
}

fuzz_target!(|input: Input| {
    let rows: Vec<Row> = input
        .rows
        .into_iter()
        .map(|(common, keyword, report, entity, synonyms)| Row {
            common,
            keyword,
            report,
            entity,
            synonyms,
            ..Default::default()
        })
        .collect();

    let top_k = usize::from(input.top_k);
    let results = match rank(&input.query, &rows, top_k) {
        Ok(results) => results,
        Err(_) => {
            assert_eq!(top_k, 0);
            return;
        }
    };

    assert!(results.len() <= top_k.min(rows.len()));
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].position < pair[1].position);
        }
    }
});
