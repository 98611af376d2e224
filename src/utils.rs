// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the canonical form queries and rows are compared in.
//!
//! Queries and sheet fields go through exactly the same functions, so a phrase
//! written in the sheet as `"Delivery-Zone"` and a question typed as
//! `"delivery zone?"` meet in the middle as `"delivery zone"`.
//!
//! # Normal form
//!
//! ```text
//! "Where's the G/L  Account-Code?"  →  "wheres the g l account code"
//! ```
//!
//! 1. Lowercase
//! 2. Drop every char outside `[a-z0-9]`, whitespace, `,`, `/`, `-`
//! 3. `/` and `-` become a space
//! 4. Collapse whitespace runs, trim
//!
//! The output alphabet is `[a-z0-9 ,]` with single spaces, which is why
//! `normalize` is idempotent.

use std::collections::HashSet;

/// Words that carry no signal in a "where can I find..." question.
///
/// Closed list: articles, pronouns, interrogatives, politeness words and a
/// few domain-neutral verbs. Membership is matched against normalized tokens,
/// so every entry is already in normal form.
pub const STOPWORDS: &[&str] = &[
    "where", "can", "i", "find", "the", "a", "an", "of", "to", "for", "in", "on", "and", "or",
    "is", "are", "do", "does", "what", "whats", "please", "me", "show", "tell",
];

/// Shortest token that counts toward overlap scoring.
pub const MIN_TOKEN_LEN: usize = 3;

/// Shortest synonym phrase that can produce a phrase hit.
pub const MIN_PHRASE_LEN: usize = 3;

/// Is this a normalized stopword?
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Normalize a string for comparison.
///
/// Pure and total: an empty input gives an empty output, and so does input
/// made entirely of dropped characters.
pub fn normalize(value: &str) -> String {
    let mut kept = String::with_capacity(value.len());
    for c in value.chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '0'..='9' | ',' => kept.push(c),
            '/' | '-' => kept.push(' '),
            c if c.is_whitespace() => kept.push(' '),
            _ => {}
        }
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize an optional field value. Absent reads as empty.
pub fn normalize_opt(value: Option<&str>) -> String {
    normalize(value.unwrap_or_default())
}

/// Significant words of a string.
///
/// Splits the normal form on whitespace and keeps tokens of at least
/// [`MIN_TOKEN_LEN`] chars that are not [`STOPWORDS`]. Commas are not
/// separators, so `"zone, codes"` yields `"zone,"` and `"codes"`.
pub fn tokenize(value: &str) -> HashSet<String> {
    normalize(value)
        .split_whitespace()
        .filter(|w| w.len() >= MIN_TOKEN_LEN && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Split a raw synonyms cell into normalized ask-phrases.
///
/// Segments are comma-separated. Each is normalized and kept only if the
/// result is at least [`MIN_PHRASE_LEN`] chars. Input order is preserved.
pub fn phrase_list(synonyms: &str) -> Vec<String> {
    synonyms
        .split(',')
        .map(normalize)
        .filter(|p| p.len() >= MIN_PHRASE_LEN)
        .collect()
}
