// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the query pipeline.
//!
//! Debug-mode assertions that verify each stage's output against its input.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`, and the
//!    O(n) walks bail out early when debug assertions are off)
//! 2. Provide **early failure detection** during development
//! 3. Compare records by **identity** (`std::ptr::eq`), never by value
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Stage            | Property                        |
//! |--------------------------------|------------------|---------------------------------|
//! | `check_subsequence`            | platform, tiers  | Output keeps input order        |
//! | `check_no_duplicates`          | merge            | Each record appears once        |
//! | `check_relevance_order`        | merge            | Tiers never go backwards        |
//! | `check_permutation`            | ranker           | Same records, only reordered    |
//! | `check_sorted_by_followers`    | ranker           | Follower order actually holds   |

use crate::scoring::ranking::{compare_followers, Followers};
use crate::search::dedup::FieldMatch;
use crate::types::{Record, SortBy};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

// ============================================================================
// FILTER CONTRACTS
// ============================================================================

/// Check that `output` is an order-preserving subsequence of `input`.
///
/// # Panics (debug builds only)
/// Panics if `output` holds a record not in `input`, or holds two records in
/// the opposite order from `input`.
#[inline]
pub fn check_subsequence(input: &[&Record], output: &[&Record]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut cursor = input.iter();
    for (i, out) in output.iter().enumerate() {
        let found = cursor.any(|candidate| std::ptr::eq(*candidate, *out));
        debug_assert!(
            found,
            "Contract violation: output[{}] ('{}') is not an in-order member of the input",
            i,
            out.handle
        );
    }
}

/// Check that every record appears at most once.
#[inline]
pub fn check_no_duplicates(records: &[&Record]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen: HashSet<*const Record> = HashSet::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        debug_assert!(
            seen.insert(*record as *const Record),
            "Contract violation: duplicate record '{}' at position {}",
            record.handle,
            i
        );
    }
}

// ============================================================================
// MERGE CONTRACTS
// ============================================================================

/// Check that merged matches are unique by position and never step back to a
/// higher-priority field.
///
/// Tiers are fed into the merger in priority order, so once a secondary-tag
/// match is accepted no handle match may follow it.
#[inline]
pub fn check_relevance_order(matches: &[FieldMatch]) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut positions = HashSet::with_capacity(matches.len());
    for (i, m) in matches.iter().enumerate() {
        debug_assert!(
            positions.insert(m.position),
            "Contract violation: position {} merged twice (at {})",
            m.position,
            i
        );
    }

    for pair in matches.windows(2) {
        debug_assert!(
            pair[0].field <= pair[1].field,
            "Contract violation: {:?} match at position {} follows {:?} match at position {}",
            pair[1].field,
            pair[1].position,
            pair[0].field,
            pair[0].position
        );
    }
}

// ============================================================================
// RANKER CONTRACTS
// ============================================================================

/// Check that `output` holds exactly the records of `input`, each as often.
#[inline]
pub fn check_permutation(input: &[&Record], output: &[&Record]) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        input.len(),
        output.len(),
        "Contract violation: ranker changed the number of records"
    );

    let mut counts: HashMap<*const Record, isize> = HashMap::with_capacity(input.len());
    for record in input {
        *counts.entry(*record as *const Record).or_default() += 1;
    }
    for record in output {
        *counts.entry(*record as *const Record).or_default() -= 1;
    }
    debug_assert!(
        counts.values().all(|&count| count == 0),
        "Contract violation: ranker output is not a permutation of its input"
    );
}

/// Check that items are in the requested follower order.
///
/// Relevance order is not checked here (it has no follower constraint).
#[inline]
pub fn check_sorted_by_followers<T: Followers>(items: &[T], sort_by: SortBy) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, pair) in items.windows(2).enumerate() {
        debug_assert!(
            compare_followers(&pair[0], &pair[1], sort_by) != Ordering::Greater,
            "Contract violation: {} order broken at {}: {} then {}",
            sort_by,
            i,
            pair[0].followers(),
            pair[1].followers()
        );
    }
}
