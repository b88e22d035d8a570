//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Platform, Record, Tag};

/// Create a record with no primary tag and no secondary tags.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(handle: &str, platform: &str, followers: u64) -> Record {
    make_record_with_tags(handle, platform, followers, None, &[])
}

/// Create a record with an optional primary tag and secondary tags.
pub fn make_record_with_tags(
    handle: &str,
    platform: &str,
    followers: u64,
    primary_tag: Option<&str>,
    tags: &[&str],
) -> Record {
    Record {
        handle: handle.to_string(),
        platform: Platform {
            name: platform.to_string(),
        },
        primary_tag: primary_tag.map(|name| Tag {
            name: name.to_string(),
        }),
        tags: tags
            .iter()
            .map(|name| Tag {
                name: (*name).to_string(),
            })
            .collect(),
        followers,
    }
}

/// The three-record collection used by the end-to-end scenarios:
/// joe (instagram, 100), ana (twitter, 50), joan (instagram, 10, tag "joe-fan").
pub fn scenario_records() -> Vec<Record> {
    vec![
        make_record("joe", "instagram", 100),
        make_record("ana", "twitter", 50),
        make_record_with_tags("joan", "instagram", 10, None, &["joe-fan"]),
    ]
}
