//! Follower ordering and its stability.

use super::common::{handles, make_record, make_record_with_tags, mixed_records, refs};
use scout::{apply_sort, filter_by_search, Record, SortBy};

#[test]
fn ascending_and_descending_orders() {
    let records = mixed_records();
    let input = refs(&records);

    let asc = apply_sort(&input, SortBy::FollowersAsc);
    assert!(asc.windows(2).all(|w| w[0].followers <= w[1].followers));

    let dsc = apply_sort(&input, SortBy::FollowersDsc);
    assert!(dsc.windows(2).all(|w| w[0].followers >= w[1].followers));
}

#[test]
fn ties_keep_relevance_order_ascending() {
    // travelwithmia and wanderfood both have 52_000 followers
    let records = mixed_records();

    let relevance = filter_by_search(&refs(&records), "a", SortBy::Relevance);
    let sorted = filter_by_search(&refs(&records), "a", SortBy::FollowersAsc);

    fn tied(list: &[&Record]) -> Vec<String> {
        list.iter()
            .filter(|r| r.followers == 52_000)
            .map(|r| r.handle.clone())
            .collect()
    }
    assert_eq!(tied(&relevance), tied(&sorted));
}

#[test]
fn ties_keep_relevance_order_descending() {
    // Equal followers: handle match must stay ahead of tag match
    let records = vec![
        make_record_with_tags("tag_match", "instagram", 10, None, &["surf"]),
        make_record("big_account", "instagram", 500),
        make_record("surf_handle", "instagram", 10),
    ];

    let result = filter_by_search(&refs(&records), "surf", SortBy::FollowersDsc);
    assert_eq!(handles(&result), vec!["surf_handle", "tag_match"]);

    let result = filter_by_search(&refs(&records), "surf", SortBy::FollowersAsc);
    assert_eq!(handles(&result), vec!["surf_handle", "tag_match"]);
}

#[test]
fn unknown_sort_is_relevance() {
    let records = mixed_records();
    let input = refs(&records);

    let relevance = filter_by_search(&input, "food", SortBy::Relevance);
    let unknown = filter_by_search(&input, "food", SortBy::parse("popularity"));
    assert_eq!(handles(&relevance), handles(&unknown));
}

#[test]
fn zero_followers_sort_first_ascending() {
    let records = vec![make_record("new", "tiktok", 0), make_record("old", "tiktok", 1)];

    let sorted = apply_sort(&refs(&records), SortBy::FollowersAsc);
    assert_eq!(handles(&sorted), vec!["new", "old"]);
}
