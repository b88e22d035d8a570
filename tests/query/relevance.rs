//! Relevance order: handle → primary tag → secondary tags.

use super::common::{handles, make_record, make_record_with_tags, mixed_records, refs};
use scout::{best_match_field, filter_by_search, relevance_matches, MatchField, SearchScope, SortBy};

#[test]
fn tiers_order_regardless_of_source_order() {
    // Source order is C, B, A; relevance order must be A, B, C
    let records = vec![
        make_record_with_tags("carol", "instagram", 1, None, &["yoga"]),
        make_record_with_tags("bob", "instagram", 1, Some("yoga"), &[]),
        make_record("yoga_anna", "instagram", 1),
    ];

    assert_eq!(
        handles(&filter_by_search(&refs(&records), "yoga", SortBy::Relevance)),
        vec!["yoga_anna", "bob", "carol"]
    );
}

#[test]
fn within_a_tier_source_order_holds() {
    let records = mixed_records();

    // Handle tier: fitfood, foodie_fred, wanderfood
    // Primary tier: wanderfood ("Food"), already placed
    // Secondary tier: travelwithmia, (fitfood), mia_moves
    assert_eq!(
        handles(&filter_by_search(&refs(&records), "food", SortBy::Relevance)),
        vec!["fitfood", "foodie_fred", "wanderfood", "travelwithmia", "mia_moves"]
    );
}

#[test]
fn primary_tag_is_case_insensitive_secondary_is_not() {
    let records = mixed_records();

    // wanderfood's tag is "Travel" and stays unmatched
    let result = filter_by_search(&refs(&records), "TRAVEL", SortBy::Relevance);
    assert_eq!(handles(&result), vec!["travelwithmia", "foodie_fred"]);
}

#[test]
fn relevance_matches_report_placing_field() {
    let records = mixed_records();
    let input = refs(&records);

    let matches = relevance_matches(&input, "fit", SearchScope::All);
    let placed: Vec<(String, MatchField)> = matches
        .iter()
        .map(|m| (input[m.position].handle.clone(), m.field))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("fitfood".to_string(), MatchField::Handle),
            ("mia_moves".to_string(), MatchField::SecondaryTag),
        ]
    );
}

#[test]
fn best_match_field_agrees_with_merge() {
    let records = mixed_records();
    let input = refs(&records);

    for query in ["food", "travel", "mia", "fit", "dance", "vlog"] {
        for m in relevance_matches(&input, query, SearchScope::All) {
            assert_eq!(best_match_field(input[m.position], query), Some(m.field));
        }
    }
}

#[test]
fn handle_scope_matches_original_by_handle_mode() {
    let records = mixed_records();

    let result = scout::filter_by_search_scoped(
        &refs(&records),
        "mia",
        SearchScope::Handle,
        SortBy::Relevance,
    );
    assert_eq!(handles(&result), vec!["travelwithmia", "mia_moves"]);
}

#[test]
fn tag_scope_only_reads_secondary_tags() {
    let records = mixed_records();

    let result =
        scout::filter_by_search_scoped(&refs(&records), "dance", SearchScope::Tag, SortBy::Relevance);
    assert!(result.is_empty(), "dance is only a primary tag: {:?}", handles(&result));
}
