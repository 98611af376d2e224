// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how cheat-sheet rows get their numbers.
//!
//! A synonym phrase hit dominates, shared words come next, and an entity hint
//! nudges rows of the right kind up and everything else down by one. Ranking
//! is a stable descending sort on the total.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_results, rank, rank_query};
