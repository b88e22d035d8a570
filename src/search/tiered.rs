// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-tier search core: handle → primary tag → secondary tags.
//!
//! Each tier is an independent pass over the platform-filtered records and
//! yields the positions that match on one field, in source order. The tiers
//! are then concatenated in priority order and deduplicated by position
//! (`ResultMerger`), which is what "relevance order" means here. Only after
//! that does the ranker get a chance to reorder by followers.
//!
//! Matching rules per tier:
//!
//! | Tier | Field            | Comparison                                        |
//! |------|------------------|---------------------------------------------------|
//! | 1    | `handle`         | lowercased field contains lowercased input        |
//! | 2    | `primaryTag`     | lowercased field contains lowercased input        |
//! | 3    | `tags[].name`    | field *as-is* contains lowercased input           |
//!
//! Tier 3 is asymmetric on purpose: the stored tag names are expected to be
//! lowercase already, and a tag written `Fitness` is not found by `fit`.
//!
//! An empty search input bypasses everything, including the ranker.

use crate::contracts::{check_no_duplicates, check_permutation, check_subsequence};
use crate::scoring::ranking::apply_sort;
use crate::search::dedup::{FieldMatch, ResultMerger};
use crate::types::{MatchField, Record, SearchScope, SortBy};
use crate::utils::{contains_exact, contains_folded, fold};

/// Check if one record matches on one field, given the folded search input.
#[inline]
pub fn field_matches_record(record: &Record, folded_input: &str, field: MatchField) -> bool {
    match field {
        MatchField::Handle => contains_folded(&record.handle, folded_input),
        MatchField::PrimaryTag => record
            .primary_tag_name()
            .is_some_and(|name| contains_folded(name, folded_input)),
        MatchField::SecondaryTag => record
            .tag_names()
            .any(|name| contains_exact(name, folded_input)),
    }
}

/// Positions of the records matching one tier, in source order.
pub fn field_matches(records: &[&Record], folded_input: &str, field: MatchField) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| field_matches_record(record, folded_input, field))
        .map(|(position, _)| position)
        .collect()
}

/// Highest-priority field on which `search_input` matches a record.
///
/// This is the field that decides where the record lands in relevance order.
/// Returns `None` for an empty input or no match.
pub fn best_match_field(record: &Record, search_input: &str) -> Option<MatchField> {
    if search_input.is_empty() {
        return None;
    }
    let folded = fold(search_input);
    SearchScope::All
        .fields()
        .iter()
        .copied()
        .find(|&field| field_matches_record(record, &folded, field))
}

/// Run every tier of `scope` and merge them into relevance order.
///
/// The result is deduplicated; each match carries the field that placed it.
/// An empty input yields no matches (callers decide what bypass means).
pub fn relevance_matches(records: &[&Record], search_input: &str, scope: SearchScope) -> Vec<FieldMatch> {
    if search_input.is_empty() {
        return Vec::new();
    }

    let folded = fold(search_input);
    let mut merger = ResultMerger::with_capacity(records.len());
    for &field in scope.fields() {
        merger.merge_tier(field, field_matches(records, &folded, field));
    }
    merger.into_matches()
}

/// Narrow records by free text across all fields, then rank.
///
/// - Empty input: returns `records` unchanged, and `sort_by` is ignored.
/// - Otherwise: handle matches, then primary-tag matches, then secondary-tag
///   matches, each record once, then reordered by `sort_by`.
pub fn filter_by_search<'a>(records: &[&'a Record], search_input: &str, sort_by: SortBy) -> Vec<&'a Record> {
    filter_by_search_scoped(records, search_input, SearchScope::All, sort_by)
}

/// [`filter_by_search`] restricted to the fields of `scope`.
pub fn filter_by_search_scoped<'a>(
    records: &[&'a Record],
    search_input: &str,
    scope: SearchScope,
    sort_by: SortBy,
) -> Vec<&'a Record> {
    if search_input.is_empty() {
        return records.to_vec();
    }

    let relevance: Vec<&'a Record> = relevance_matches(records, search_input, scope)
        .into_iter()
        .map(|m| records[m.position])
        .collect();
    check_no_duplicates(&relevance);

    let ranked = apply_sort(&relevance, sort_by);
    check_permutation(&relevance, &ranked);
    ranked
}

/// Single-tier search: the records matching one field, in source order.
pub fn filter_by_field<'a>(records: &[&'a Record], search_input: &str, field: MatchField) -> Vec<&'a Record> {
    let folded = fold(search_input);
    let matched: Vec<&'a Record> = field_matches(records, &folded, field)
        .into_iter()
        .map(|position| records[position])
        .collect();
    check_subsequence(records, &matched);
    matched
}
