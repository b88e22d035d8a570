//! A record appears once, however many fields it matches on.

use super::common::{handles, make_record, make_record_with_tags, refs};
use scout::{filter_by_search, run_query, QueryState, Record, SortBy};
use std::collections::HashSet;

fn assert_unique(records: &[&Record]) {
    let mut seen = HashSet::new();
    for record in records {
        assert!(
            seen.insert(*record as *const Record),
            "'{}' appears more than once in {:?}",
            record.handle,
            handles(records)
        );
    }
}

#[test]
fn handle_and_tag_match_counts_once() {
    let records = vec![make_record_with_tags("acme", "instagram", 10, None, &["acme"])];

    let result = filter_by_search(&refs(&records), "acme", SortBy::Relevance);
    assert_eq!(result.len(), 1);
    assert_unique(&result);
}

#[test]
fn all_three_fields_match_counts_once_at_handle_position() {
    let records = vec![
        make_record_with_tags("tagged", "instagram", 1, None, &["acme"]),
        make_record_with_tags("acme", "instagram", 1, Some("acme"), &["acme", "acme-fans"]),
    ];

    let result = filter_by_search(&refs(&records), "acme", SortBy::Relevance);
    assert_eq!(handles(&result), vec!["acme", "tagged"]);
}

#[test]
fn repeated_matching_tags_count_once() {
    let records = vec![make_record_with_tags("x", "twitter", 1, None, &["run", "running", "runner"])];

    assert_eq!(filter_by_search(&refs(&records), "run", SortBy::Relevance).len(), 1);
}

#[test]
fn equal_valued_records_are_distinct() {
    // Identity, not value: two identical rows are two results
    let records = vec![make_record("twin", "instagram", 5), make_record("twin", "instagram", 5)];

    let result = filter_by_search(&refs(&records), "twin", SortBy::Relevance);
    assert_eq!(result.len(), 2);
    assert_unique(&result);
}

#[test]
fn dedup_survives_sorting() {
    let records = vec![
        make_record_with_tags("acme", "instagram", 10, Some("acme"), &["acme"]),
        make_record_with_tags("other", "instagram", 20, Some("acme"), &["acme"]),
    ];

    for sort in ["relevance", "followersAsc", "followersDsc"] {
        let state = QueryState::from_params("all", "acme", sort);
        let result = run_query(&records, &state);
        assert_eq!(result.len(), 2, "sort {}", sort);
        assert_unique(&result);
    }
}
