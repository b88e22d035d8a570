// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search stages: platform narrowing, then free-text tiers.
//!
//! The platform filter runs first and is nearly free. The text search runs
//! three independent field tiers (handle → primary tag → secondary tags) and
//! merges them into one deduplicated relevance order.

pub mod dedup;
pub mod platform;
pub mod tiered;

pub use dedup::{FieldMatch, ResultMerger};
pub use platform::filter_by_platform;
pub use tiered::{
    best_match_field, field_matches, field_matches_record, filter_by_field, filter_by_search,
    filter_by_search_scoped, relevance_matches,
};
