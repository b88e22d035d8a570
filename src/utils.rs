//! Utility functions for string matching.

/// Fold a search term or field value for case-insensitive comparison.
///
/// Unicode-aware lowercasing, nothing more: no trimming, no whitespace
/// collapsing, no diacritic stripping. `"  Joe "` stays `"  joe "`.
#[inline]
pub fn fold(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test against an already-folded needle.
///
/// Callers fold the needle once per query rather than once per record.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    fold(haystack).contains(folded_needle)
}

/// Case-sensitive substring test.
///
/// Secondary tag names are compared this way: the needle is folded but the
/// tag name is not, so `"Fitness"` does not match `"fit"`.
#[inline]
pub fn contains_exact(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
