// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a cheat-sheet search.
//!
//! A sheet is a `Vec<Row>`. A question becomes a [`Query`] once, and every row
//! is scored against it into a [`ScoreResult`]. Nothing here is mutated during
//! a search; results borrow the rows they describe.
//!
//! | Type          | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `Row`         | One cheat-sheet entry, all fields plain strings  |
//! | `Query`       | Normalized question plus its token set           |
//! | `Explanation` | Sub-scores and what triggered them               |
//! | `ScoreResult` | A row, its position, score and explanation       |
//! | `EntityHint`  | Entity tag and the words that hint at it         |

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::{normalize, tokenize};

/// One entry in the cheat sheet.
///
/// Column headers match the sheet as exported. Absent or empty cells are
/// empty strings, never `None`; the scorer treats them as contributing nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    /// Human-readable label for the concept.
    #[serde(rename = "Common")]
    pub common: String,
    /// Search term or column name.
    #[serde(rename = "Keyword / Search Term")]
    pub keyword: String,
    /// Table, report or database holding the field.
    #[serde(rename = "Database/Report Location")]
    pub report: String,
    /// Fully qualified path to the field.
    #[serde(rename = "Full Information Key")]
    pub full_key: String,
    /// Domain entity tag (agency, donors, vendors, items, ledger...).
    #[serde(rename = "Entity Type")]
    pub entity: String,
    /// Normalized field name. Carried through, not scored.
    #[serde(rename = "Canonical Field")]
    pub canonical_field: String,
    /// Comma-delimited ask phrases.
    #[serde(rename = "Synonyms / Ask Phrases")]
    pub synonyms: String,
}

/// A question prepared for scoring: normalized once, tokenized once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub normalized: String,
    pub tokens: HashSet<String>,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Query {
            raw: text.to_string(),
            normalized: normalize(text),
            tokens: tokenize(text),
        }
    }

    /// True when nothing survives normalization.
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::new(text)
    }
}

/// Why a row scored what it did.
///
/// The three sub-scores use stable keys (`syn_phrase_hit`, `token_overlap`,
/// `entity_bonus`) and are always present. A mismatched entity hint lowers the
/// score by one without an entry here, so the sub-scores can sum to one more
/// than the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub syn_phrase_hit: i32,
    pub token_overlap: i32,
    pub entity_bonus: i32,
    /// Phrase behind `syn_phrase_hit` (first one to reach the best score).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_phrase: Option<String>,
    /// First entity-hint group triggered by the query, bonus or penalty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hinted_entity: Option<&'static str>,
}

impl Explanation {
    pub const SYN_PHRASE_HIT: &'static str = "syn_phrase_hit";
    pub const TOKEN_OVERLAP: &'static str = "token_overlap";
    pub const ENTITY_BONUS: &'static str = "entity_bonus";

    /// Sub-scores as `(key, value)` in stable order.
    pub fn entries(&self) -> [(&'static str, i32); 3] {
        [
            (Self::SYN_PHRASE_HIT, self.syn_phrase_hit),
            (Self::TOKEN_OVERLAP, self.token_overlap),
            (Self::ENTITY_BONUS, self.entity_bonus),
        ]
    }

    /// Look a sub-score up by key.
    pub fn get(&self, key: &str) -> Option<i32> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Sum of the recorded sub-scores (excludes the silent penalty).
    pub fn recorded_total(&self) -> i32 {
        self.syn_phrase_hit + self.token_overlap + self.entity_bonus
    }
}

/// A scored row. Produced fresh per query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult<'a> {
    pub row: &'a Row,
    /// 0-based index of the row in the input sheet.
    pub position: usize,
    pub score: i32,
    pub explanation: Explanation,
}

/// An entity tag and the query words that point at it.
///
/// Triggers match as substrings of the normalized query, so multi-word
/// triggers like `"general ledger"` work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityHint {
    pub entity: &'static str,
    pub triggers: &'static [&'static str],
}

impl EntityHint {
    /// Does any trigger appear in the normalized query?
    pub fn triggered_by(&self, normalized_query: &str) -> bool {
        self.triggers.iter().any(|t| normalized_query.contains(t))
    }
}
