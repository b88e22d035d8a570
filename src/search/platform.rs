// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Platform filter: the first and cheapest stage.
//!
//! `all` is the identity. Any other value keeps records whose platform name
//! contains it as a case-sensitive substring, which for the fixed platform
//! names behaves as equality. A value nobody uses filters to nothing.

use crate::contracts::check_subsequence;
use crate::types::{PlatformFilter, Record};

impl PlatformFilter {
    /// Check if a record passes this filter.
    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Named(name) => record.platform.name.contains(name.as_str()),
        }
    }
}

/// Narrow records to one platform, keeping source order.
pub fn filter_by_platform<'a>(records: &[&'a Record], platform: &PlatformFilter) -> Vec<&'a Record> {
    let filtered: Vec<&'a Record> = match platform {
        PlatformFilter::All => records.to_vec(),
        PlatformFilter::Named(_) => records
            .iter()
            .copied()
            .filter(|record| platform.matches(record))
            .collect(),
    };
    check_subsequence(records, &filtered);
    filtered
}
