// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexical search over a report cheat sheet.
//!
//! A cheat sheet maps things people ask about ("agency delivery zone") to where
//! the data actually lives (report, column, full key). This crate takes a
//! free-text question, scores every row of the sheet, and returns the best
//! few with an explanation of where each score came from.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  sheet.rs   │────▶│   types.rs   │────▶│    scoring/      │
//! │ (load_sheet,│     │ (Row, Query, │     │ (score_row, rank)│
//! │  columns)   │     │  ScoreResult)│     │                  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                            │                      │
//!                            ▼                      ▼
//!                     ┌─────────────────────────────────┐
//!                     │            utils.rs             │
//!                     │ (normalize, tokenize, phrases)  │
//!                     └─────────────────────────────────┘
//! ```
//!
//! Scoring is a pure function of `(query, row)`. Ranking is a stable sort on
//! the score, so rows that tie stay in sheet order.
//!
//! # Usage
//!
//! ```
//! use fieldfinder::{rank, Row};
//!
//! let rows = vec![Row {
//!     common: "Delivery Zone".into(),
//!     report: "Agency Master".into(),
//!     entity: "agency".into(),
//!     synonyms: "delivery zone, zone code".into(),
//!     ..Default::default()
//! }];
//!
//! let results = rank("Where can I find agency delivery zone codes?", &rows, 3).unwrap();
//! assert_eq!(results[0].row.common, "Delivery Zone");
//! assert_eq!(results[0].explanation.syn_phrase_hit, 9);
//! ```

pub mod error;
pub mod scoring;
pub mod sheet;
pub mod testing;
mod types;
mod utils;

pub use error::{Error, Result};
pub use scoring::{
    compare_results, entity_adjustment, hinted_entity, phrase_score, rank, rank_query, score_row,
    ENTITY_HINTS,
};
pub use sheet::{load_sheet, missing_columns, read_csv, read_json, SheetFormat, REQUIRED_COLUMNS};
pub use types::{EntityHint, Explanation, Query, Row, ScoreResult};
pub use utils::{is_stopword, normalize, normalize_opt, phrase_list, tokenize, STOPWORDS};
