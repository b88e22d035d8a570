//! Shared test utilities and fixtures.

#![allow(dead_code)]

use scout::Record;

// Re-export canonical test utilities from scout::testing
pub use scout::testing::{make_record, make_record_with_tags, scenario_records};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the sample collection shipped with the repo.
pub const SAMPLE_RECORDS: &str = "demos/influencers.json";

/// A mixed collection exercising every tier and every platform.
///
/// | pos | handle          | platform  | followers | primary  | tags                  |
/// |-----|-----------------|-----------|-----------|----------|-----------------------|
/// | 0   | travelwithmia   | instagram | 52_000    | travel   | food, vlog            |
/// | 1   | fitfood         | tiktok    | 8_000     | fitness  | food                  |
/// | 2   | foodie_fred     | youtube   | 120_000   | cooking  | travel                |
/// | 3   | daily_dev       | twitter   | 3_400     | -        | -                     |
/// | 4   | wanderfood      | instagram | 52_000    | Food     | Travel                |
/// | 5   | mia_moves       | facebook  | 900       | dance    | fitness, food         |
pub fn mixed_records() -> Vec<Record> {
    vec![
        make_record_with_tags("travelwithmia", "instagram", 52_000, Some("travel"), &["food", "vlog"]),
        make_record_with_tags("fitfood", "tiktok", 8_000, Some("fitness"), &["food"]),
        make_record_with_tags("foodie_fred", "youtube", 120_000, Some("cooking"), &["travel"]),
        make_record("daily_dev", "twitter", 3_400),
        make_record_with_tags("wanderfood", "instagram", 52_000, Some("Food"), &["Travel"]),
        make_record_with_tags("mia_moves", "facebook", 900, Some("dance"), &["fitness", "food"]),
    ]
}

// ============================================================================
// ASSERTION HELPERS
// ============================================================================

/// Handles of a result list, in order.
pub fn handles(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.handle.clone()).collect()
}

/// Borrow a whole collection.
pub fn refs(records: &[Record]) -> Vec<&Record> {
    records.iter().collect()
}

/// Assert two result lists hold the same records (by identity) in the same order.
pub fn assert_same_records(actual: &[&Record], expected: &[&Record]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {:?} vs {:?}",
        handles(actual),
        handles(expected)
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            std::ptr::eq(*a, *e),
            "record {} differs: '{}' vs '{}'",
            i,
            a.handle,
            e.handle
        );
    }
}
