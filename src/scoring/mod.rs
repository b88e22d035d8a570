// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: the last stage of the pipeline.
//!
//! Relevance is decided by which field matched, not by a numeric score, so
//! there is nothing to compute here beyond follower ordering.

pub mod ranking;

pub use ranking::{apply_sort, compare_followers, Followers};
