// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text normalizer.
//!
//! Whatever bytes come in, normalizing twice equals normalizing once, and the
//! output alphabet is `[a-z0-9 ,]` with single spaces.

#![no_main]

use fieldfinder::{normalize, phrase_list, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let once = normalize(&text);
    assert_eq!(normalize(&once), once);
    assert!(once
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == ','));
    assert!(!once.contains("  "));

    for token in tokenize(&text) {
        assert!(token.len() >= 3);
    }
    for phrase in phrase_list(&text) {
        assert!(phrase.len() >= 3 && !phrase.contains(','));
    }
});
