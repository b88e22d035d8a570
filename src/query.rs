// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pipeline orchestration: platform → search → rank.
//!
//! `run_query` is a pure function of the source collection and a
//! [`QueryState`]. It is meant to be re-run in full on every parameter change;
//! nothing is cached and nothing survives between calls, so any number of
//! callers can share one collection without synchronization.
//!
//! The result is always the literal computed list. An empty result for a
//! non-empty search means "nothing matched", and the engine never swaps in
//! the full collection for it. Whether to show everything when *no* search is
//! active is the caller's presentation decision.

use crate::search::{filter_by_platform, filter_by_search_scoped};
use crate::types::{QueryState, Record};
use tracing::debug;

/// Run one query over the full collection.
pub fn run_query<'a>(all_records: &'a [Record], state: &QueryState) -> Vec<&'a Record> {
    let all: Vec<&'a Record> = all_records.iter().collect();
    run_query_refs(&all, state)
}

/// [`run_query`] over an already-borrowed collection.
pub fn run_query_refs<'a>(all_records: &[&'a Record], state: &QueryState) -> Vec<&'a Record> {
    let platform_filtered = filter_by_platform(all_records, &state.platform);
    let result = filter_by_search_scoped(
        &platform_filtered,
        &state.search_input,
        state.scope,
        state.sort_by,
    );

    debug!(
        platform = %state.platform,
        search = %state.search_input,
        sort = %state.sort_by,
        scope = state.scope.as_str(),
        total = all_records.len(),
        after_platform = platform_filtered.len(),
        results = result.len(),
        "query complete"
    );

    result
}
