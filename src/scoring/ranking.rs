// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored rows get ordered and cut.
//!
//! Higher score first. Equal scores keep sheet order, which matters a lot in
//! practice: on a vague question most rows tie at 0 or -1, and the sheet's
//! own ordering is the only sensible tiebreaker left.
//!
//! The sort is stable and the comparator looks at score only. Ties are never
//! broken by any other field, so permuting the sheet permutes tied results
//! the same way.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scoring::score_row;
use crate::types::{Query, Row, ScoreResult};

/// Compare two results for ranking: descending by score.
///
/// Returns `Equal` for equal scores on purpose. Used with a stable sort,
/// that keeps input order among ties.
pub fn compare_results(a: &ScoreResult<'_>, b: &ScoreResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Rank a sheet against a raw question.
///
/// Normalizes and tokenizes `query` once, then defers to [`rank_query`].
pub fn rank<'a>(query: &str, rows: &'a [Row], top_k: usize) -> Result<Vec<ScoreResult<'a>>> {
    rank_query(&Query::new(query), rows, top_k)
}

/// Rank a sheet against a prepared query.
///
/// Every row is scored independently. Returns at most `top_k` results, fewer
/// when the sheet is smaller. An empty sheet gives an empty result.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `top_k` is 0.
pub fn rank_query<'a>(
    query: &Query,
    rows: &'a [Row],
    top_k: usize,
) -> Result<Vec<ScoreResult<'a>>> {
    if top_k == 0 {
        return Err(Error::InvalidArgument(
            "top_k must be a positive number of results".to_string(),
        ));
    }

    let mut results: Vec<ScoreResult<'a>> = rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let (score, explanation) = score_row(query, row);
            ScoreResult {
                row,
                position,
                score,
                explanation,
            }
        })
        .collect();

    // Vec::sort_by is stable
    results.sort_by(compare_results);
    results.truncate(top_k);

    debug!(
        query = %query.normalized,
        scored = rows.len(),
        kept = results.len(),
        best = ?results.first().map(|r| r.score),
        "ranked sheet"
    );

    Ok(results)
}
