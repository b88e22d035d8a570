//! End-to-end scenarios over the three-record collection
//! joe (instagram, 100), ana (twitter, 50), joan (instagram, 10, tag "joe-fan").

use super::common::{handles, make_record, scenario_records};
use scout::{run_query, QueryState};

#[test]
fn platform_only_query_returns_platform_members() {
    let records = vec![make_record("joe", "instagram", 100), make_record("ana", "twitter", 50)];
    let state = QueryState::from_params("instagram", "", "relevance");

    assert_eq!(handles(&run_query(&records, &state)), vec!["joe"]);
}

#[test]
fn handle_match_precedes_tag_match() {
    let records = scenario_records();
    let state = QueryState::from_params("all", "joe", "relevance");

    assert_eq!(handles(&run_query(&records, &state)), vec!["joe", "joan"]);
}

#[test]
fn empty_search_ignores_sort() {
    let records = scenario_records();
    let state = QueryState::from_params("all", "", "followersDsc");

    assert_eq!(handles(&run_query(&records, &state)), vec!["joe", "ana", "joan"]);
}

#[test]
fn platform_search_and_ascending_sort_compose() {
    let records = scenario_records();
    let state = QueryState::from_params("instagram", "jo", "followersAsc");

    assert_eq!(handles(&run_query(&records, &state)), vec!["joan", "joe"]);
}

#[test]
fn descending_sort_reverses_distinct_counts() {
    let records = scenario_records();
    let state = QueryState::from_params("all", "jo", "followersDsc");

    assert_eq!(handles(&run_query(&records, &state)), vec!["joe", "joan"]);
}

#[test]
fn zero_match_search_returns_empty() {
    let records = scenario_records();
    let state = QueryState::from_params("all", "nobody", "relevance");

    assert!(run_query(&records, &state).is_empty());
}
