// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get reordered.
//!
//! Relevance order is established by the tier merge and is the default. The
//! only other orders are by follower count, and both are *stable*: records
//! with the same follower count keep their relevance order. So among equally
//! followed accounts a handle match still comes before a tag match.

use crate::contracts::check_sorted_by_followers;
use crate::types::{Record, SortBy};
use std::cmp::Ordering;

/// Anything the ranker can order by follower count.
pub trait Followers {
    fn followers(&self) -> u64;
}

impl Followers for Record {
    #[inline]
    fn followers(&self) -> u64 {
        self.followers
    }
}

impl<T: Followers + ?Sized> Followers for &T {
    #[inline]
    fn followers(&self) -> u64 {
        (**self).followers()
    }
}

/// Compare two items under a sort order.
///
/// `Relevance` compares everything as equal, so a stable sort with it is the
/// identity.
pub fn compare_followers<T: Followers + ?Sized>(a: &T, b: &T, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Relevance => Ordering::Equal,
        SortBy::FollowersAsc => a.followers().cmp(&b.followers()),
        SortBy::FollowersDsc => b.followers().cmp(&a.followers()),
    }
}

/// Reorder items by the requested sort.
///
/// `Relevance` returns the input order untouched. The follower orders use
/// `sort_by` (a stable merge sort), so ties keep their incoming order.
pub fn apply_sort<T: Followers + Clone>(items: &[T], sort_by: SortBy) -> Vec<T> {
    let mut sorted = items.to_vec();
    if sort_by != SortBy::Relevance {
        sorted.sort_by(|a, b| compare_followers(a, b, sort_by));
    }
    check_sorted_by_followers(&sorted, sort_by);
    sorted
}
