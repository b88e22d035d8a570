// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Position-keyed result deduplication.
//!
//! A record should appear at most once in search results. Sounds obvious, but
//! a handle like "acme" with a tag named "acme" matches twice, and the naive
//! concatenation of tiers shows it twice.
//!
//! `ResultMerger` keys on the record's position in the searched sequence. That
//! is record identity: two records with identical field values at different
//! positions are two results, one record matched by three tiers is one.
//!
//! **Invariant**: Each record appears at most once, at the position of its
//! first (highest-priority) match.
//!
//! **Verified by**:
//! - `check_relevance_order` (contracts.rs)
//! - `prop_merged_results_unique` (tests/property.rs)

use crate::contracts::check_relevance_order;
use crate::types::MatchField;
use std::collections::HashSet;

/// A record position in the searched sequence, and the field it matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub position: usize,
    pub field: MatchField,
}

/// First-occurrence merger for tier results.
///
/// Feed tiers in priority order (handle, primary tag, secondary tag). The
/// first match for a position wins; later matches for the same position are
/// dropped. Output order is acceptance order, which is relevance order.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_tier(MatchField::Handle, handle_positions);
/// merger.merge_tier(MatchField::PrimaryTag, primary_positions);
/// merger.merge_tier(MatchField::SecondaryTag, secondary_positions);
/// let relevance = merger.into_matches();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger {
    seen: HashSet<usize>,
    matches: Vec<FieldMatch>,
}

impl ResultMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a merger with room for `capacity` unique records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            matches: Vec::with_capacity(capacity),
        }
    }

    /// Merge one match. Returns false if the position was already taken.
    pub fn merge(&mut self, m: FieldMatch) -> bool {
        // Only the position is the key; a better field can't arrive later
        if self.seen.insert(m.position) {
            self.matches.push(m);
            true
        } else {
            false
        }
    }

    /// Merge every position of one tier, in tier order.
    pub fn merge_tier(&mut self, field: MatchField, positions: impl IntoIterator<Item = usize>) {
        for position in positions {
            self.merge(FieldMatch { position, field });
        }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.seen.contains(&position)
    }

    /// Consume the merger, yielding matches in relevance order.
    pub fn into_matches(self) -> Vec<FieldMatch> {
        check_relevance_order(&self.matches);
        self.matches
    }
}
