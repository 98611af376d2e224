// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a row's score.
//!
//! Three signals, strongest first:
//!
//! | Signal          | Points                          | Source fields              |
//! |-----------------|---------------------------------|----------------------------|
//! | Synonym phrase  | `8 + len(phrase) / 10`, best one | `synonyms`                 |
//! | Token overlap   | `2 * shared`, capped at 6        | `common, keyword, report`  |
//! | Entity hint     | `+4` on match, `-1` on mismatch  | `entity`                   |
//!
//! A phrase hit alone (8+) beats a full token overlap (6), so a row that
//! explicitly lists the user's wording wins over one that merely shares words.
//!
//! # Entity hint tie-break
//!
//! Only the FIRST hint group in [`ENTITY_HINTS`] order whose trigger appears in
//! the query is considered. A question mentioning both "vendor" and "item"
//! is treated as a vendor question: vendor rows get +4 and everything else,
//! item rows included, gets -1. A query with no trigger at all leaves every
//! row untouched. Reordering the table changes results.

use crate::types::{EntityHint, Explanation, Query, Row};
use crate::utils::{normalize, phrase_list, tokenize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Flat score for any synonym phrase found in the query.
pub const PHRASE_BASE_SCORE: i32 = 8;

/// Phrase length is divided by this for the specificity bonus.
pub const PHRASE_LENGTH_DIVISOR: usize = 10;

/// Points per shared significant token.
pub const TOKEN_POINTS: i32 = 2;

/// Cap on the token overlap contribution.
pub const MAX_TOKEN_SCORE: i32 = 6;

/// Bonus when the hinted entity is the row's own.
pub const ENTITY_BONUS: i32 = 4;

/// Penalty when the hinted entity is some other entity. Not recorded in the
/// explanation.
pub const ENTITY_MISMATCH_PENALTY: i32 = 1;

/// Entity hint groups, in evaluation order. Order is significant.
///
/// `"g/l"` is listed as written but cannot match: normalization turns the
/// query's slash into a space before the lookup.
pub const ENTITY_HINTS: &[EntityHint] = &[
    EntityHint {
        entity: "agency",
        triggers: &["agency", "agencies"],
    },
    EntityHint {
        entity: "donors",
        triggers: &["donor", "donors"],
    },
    EntityHint {
        entity: "vendors",
        triggers: &["vendor", "vendors", "supplier", "suppliers"],
    },
    EntityHint {
        entity: "items",
        triggers: &["item", "items", "product", "sku"],
    },
    EntityHint {
        entity: "ledger",
        triggers: &["gl", "g/l", "ledger", "general ledger", "journal"],
    },
];

/// Score for a single matched phrase: flat base plus a length bonus.
///
/// `"delivery zone"` (13 chars) → `8 + 1 = 9`.
pub fn phrase_score(phrase: &str) -> i32 {
    PHRASE_BASE_SCORE + (phrase.len() / PHRASE_LENGTH_DIVISOR) as i32
}

/// Best phrase score among the row's synonyms that occur in the query.
///
/// Returns `(0, None)` when nothing matches. On equal scores the earlier
/// phrase is reported.
pub fn best_phrase_hit(normalized_query: &str, synonyms: &str) -> (i32, Option<String>) {
    let mut best = 0;
    let mut best_phrase = None;
    for phrase in phrase_list(synonyms) {
        if phrase.is_empty() || !normalized_query.contains(phrase.as_str()) {
            continue;
        }
        let score = phrase_score(&phrase);
        if score > best {
            best = score;
            best_phrase = Some(phrase);
        }
    }
    (best, best_phrase)
}

/// Token overlap points between the query and the row's key fields.
pub fn token_overlap_score(query: &Query, row: &Row) -> i32 {
    let mut row_tokens = tokenize(&row.common);
    row_tokens.extend(tokenize(&row.keyword));
    row_tokens.extend(tokenize(&row.report));

    let shared = query.tokens.intersection(&row_tokens).count();
    // Saturate before multiplying: shared can be as large as the query.
    let shared = shared.min(MAX_TOKEN_SCORE as usize) as i32;
    (shared * TOKEN_POINTS).min(MAX_TOKEN_SCORE)
}

/// First hint group triggered by the query, if any.
pub fn hinted_entity(normalized_query: &str) -> Option<&'static EntityHint> {
    ENTITY_HINTS
        .iter()
        .find(|hint| hint.triggered_by(normalized_query))
}

/// Entity adjustment for a row given the hinted group.
///
/// `+ENTITY_BONUS` when the row's normalized entity equals the group name,
/// `-ENTITY_MISMATCH_PENALTY` otherwise, `0` when nothing was hinted.
pub fn entity_adjustment(hint: Option<&EntityHint>, row_entity: &str) -> i32 {
    match hint {
        Some(hint) if hint.entity == normalize(row_entity) => ENTITY_BONUS,
        Some(_) => -ENTITY_MISMATCH_PENALTY,
        None => 0,
    }
}

/// Score one row against a prepared query.
///
/// Never fails: empty fields just contribute nothing. The total may be
/// negative (a mismatched entity hint on an otherwise unrelated row is -1).
pub fn score_row(query: &Query, row: &Row) -> (i32, Explanation) {
    let mut why = Explanation::default();

    let (phrase_points, matched_phrase) = best_phrase_hit(&query.normalized, &row.synonyms);
    why.syn_phrase_hit = phrase_points;
    why.matched_phrase = matched_phrase;

    why.token_overlap = token_overlap_score(query, row);

    let hint = hinted_entity(&query.normalized);
    let adjustment = entity_adjustment(hint, &row.entity);
    if adjustment > 0 {
        why.entity_bonus = adjustment;
    }
    why.hinted_entity = hint.map(|h| h.entity);

    let score = why.syn_phrase_hit + why.token_overlap + adjustment;
    (score, why)
}
