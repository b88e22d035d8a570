//! Edge cases: empty inputs, odd strings, missing optional fields.

use super::common::{handles, make_record, make_record_with_tags, mixed_records, refs};
use scout::{filter_by_search, parse_records, run_query, QueryState, SortBy};

#[test]
fn empty_collection() {
    let state = QueryState::from_params("instagram", "jo", "followersAsc");

    assert!(run_query(&[], &state).is_empty());
    assert!(run_query(&[], &QueryState::default()).is_empty());
}

#[test]
fn whitespace_is_a_real_search() {
    // Only the empty string bypasses; " " must literally be contained
    let records = vec![make_record("no_space", "twitter", 1), make_record("has space", "twitter", 1)];

    assert_eq!(
        handles(&filter_by_search(&refs(&records), " ", SortBy::Relevance)),
        vec!["has space"]
    );
}

#[test]
fn search_input_is_not_trimmed() {
    let records = vec![make_record("joe", "twitter", 1)];

    assert!(filter_by_search(&refs(&records), " joe", SortBy::Relevance).is_empty());
}

#[test]
fn unicode_handles_fold() {
    let records = vec![make_record("ÉmilieCuisine", "instagram", 1)];

    assert_eq!(filter_by_search(&refs(&records), "émilie", SortBy::Relevance).len(), 1);
}

#[test]
fn records_without_tags_only_match_on_handle() {
    let records = vec![
        make_record("plain", "youtube", 1),
        make_record_with_tags("tagged", "youtube", 1, Some("plain"), &[]),
    ];

    assert_eq!(
        handles(&filter_by_search(&refs(&records), "plain", SortBy::Relevance)),
        vec!["plain", "tagged"]
    );
}

#[test]
fn missing_fields_in_json_are_non_matching() {
    let records = parse_records(
        r#"[
            {"handle": "a", "platform": {"name": "instagram"}, "followers": 1, "primaryTag": null},
            {"handle": "b", "platform": {"name": "instagram"}, "followers": 2, "tags": []}
        ]"#,
    )
    .unwrap();

    let state = QueryState::from_params("all", "cooking", "followersDsc");
    assert!(run_query(&records, &state).is_empty());
}

#[test]
fn unknown_platform_and_sort_degrade() {
    let records = mixed_records();

    let state = QueryState::from_params("friendster", "food", "bogus");
    assert!(run_query(&records, &state).is_empty());

    let state = QueryState::from_params("all", "food", "bogus");
    assert_eq!(run_query(&records, &state).len(), 5);
}

#[test]
fn all_sentinel_is_case_sensitive() {
    let records = mixed_records();

    let state = QueryState::from_params("ALL", "", "relevance");
    assert!(run_query(&records, &state).is_empty());
}
