// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a query: records and the parameters that drive one.
//!
//! Records arrive once from whatever fetched the collection and are never
//! touched again. Everything the engine does works on borrowed `&Record`s, so
//! a record's identity is its position in the source collection, not its value.
//!
//! # Invariants
//!
//! - **Record**: read-only. No stage mutates, clones or reorders the source slice.
//!
//! - **PlatformFilter**: `"all"` is a filter value only. It never shows up as a
//!   record's `platform.name`.
//!
//! - **MatchField**: `Handle < PrimaryTag < SecondaryTag`. The derived `Ord` *is*
//!   the relevance order, lower wins.
//!
//! - **Parsing**: every enumerated control value parses totally. Unknown strings
//!   degrade (an empty platform result, identity sort, full scope) instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// RECORDS
// =============================================================================

/// Platform object attached to a record (`{"name": "instagram"}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
}

/// Tag object, used both for the primary tag and the secondary tag list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

/// One influencer profile as consumed by the engine.
///
/// Optional fields are a normal path: a record without a primary tag simply
/// never matches the primary-tag tier, and an empty `tags` list never matches
/// the secondary tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub handle: String,
    pub platform: Platform,
    #[serde(default)]
    pub primary_tag: Option<Tag>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub followers: u64,
}

impl Record {
    /// Name of the primary tag, if the record has one.
    #[inline]
    pub fn primary_tag_name(&self) -> Option<&str> {
        self.primary_tag.as_ref().map(|tag| tag.name.as_str())
    }

    /// Names of the secondary tags, in record order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.name.as_str())
    }
}

// =============================================================================
// PLATFORMS
// =============================================================================

/// The fixed set of social networks a record can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Instagram,
    Twitter,
    Facebook,
    Tiktok,
    Youtube,
}

impl PlatformKind {
    /// Every known platform, in the order the platform selector lists them.
    pub const ALL: [PlatformKind; 5] = [
        PlatformKind::Instagram,
        PlatformKind::Twitter,
        PlatformKind::Facebook,
        PlatformKind::Tiktok,
        PlatformKind::Youtube,
    ];

    /// Wire name, as it appears in `platform.name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Instagram => "instagram",
            PlatformKind::Twitter => "twitter",
            PlatformKind::Facebook => "facebook",
            PlatformKind::Tiktok => "tiktok",
            PlatformKind::Youtube => "youtube",
        }
    }

    /// Human-facing label for selectors and cards.
    pub fn label(&self) -> &'static str {
        match self {
            PlatformKind::Instagram => "Instagram",
            PlatformKind::Twitter => "Twitter",
            PlatformKind::Facebook => "Facebook",
            PlatformKind::Tiktok => "Tik-Tok",
            PlatformKind::Youtube => "Youtube",
        }
    }

    /// Look up a platform by exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform selector value: the `all` sentinel or a platform name.
///
/// `Named` keeps the raw string rather than a [`PlatformKind`] so that an
/// unrecognized value filters to nothing instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlatformFilter {
    #[default]
    All,
    Named(String),
}

impl PlatformFilter {
    /// Sentinel string for the identity filter.
    pub const ALL_SENTINEL: &'static str = "all";

    /// Parse a selector value. Never fails.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            PlatformFilter::All
        } else {
            PlatformFilter::Named(value.to_string())
        }
    }

    /// True if this is a named filter outside the known enumeration.
    pub fn is_unknown(&self) -> bool {
        match self {
            PlatformFilter::All => false,
            PlatformFilter::Named(name) => PlatformKind::from_name(name).is_none(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlatformFilter::All => Self::ALL_SENTINEL,
            PlatformFilter::Named(name) => name,
        }
    }
}

impl From<PlatformKind> for PlatformFilter {
    fn from(kind: PlatformKind) -> Self {
        PlatformFilter::Named(kind.as_str().to_string())
    }
}

impl FromStr for PlatformFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SORT AND SCOPE
// =============================================================================

/// Result ordering requested by the sort selector.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Keep relevance order (no reordering).
    #[default]
    Relevance,
    FollowersAsc,
    FollowersDsc,
}

impl SortBy {
    /// Parse a selector value. Unknown values mean relevance.
    pub fn parse(value: &str) -> Self {
        match value {
            "followersAsc" => SortBy::FollowersAsc,
            "followersDsc" => SortBy::FollowersDsc,
            _ => SortBy::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::FollowersAsc => "followersAsc",
            SortBy::FollowersDsc => "followersDsc",
        }
    }
}

impl FromStr for SortBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fields the free-text search looks at.
///
/// `All` is the multi-field relevance merge. `Handle` and `Tag` are the
/// single-field "search by" modes: `Tag` looks at the secondary tags only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Handle,
    Tag,
}

impl SearchScope {
    /// Parse a selector value. Unknown values mean all fields.
    pub fn parse(value: &str) -> Self {
        match value {
            "handle" => SearchScope::Handle,
            "tag" => SearchScope::Tag,
            _ => SearchScope::All,
        }
    }

    /// Fields searched under this scope, in priority order.
    pub fn fields(&self) -> &'static [MatchField] {
        match self {
            SearchScope::All => &[
                MatchField::Handle,
                MatchField::PrimaryTag,
                MatchField::SecondaryTag,
            ],
            SearchScope::Handle => &[MatchField::Handle],
            SearchScope::Tag => &[MatchField::SecondaryTag],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Handle => "handle",
            SearchScope::Tag => "tag",
        }
    }
}

impl FromStr for SearchScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Field a search term matched on.
///
/// This is the primary sort key for relevance order: a handle match always
/// precedes a primary-tag match, which always precedes a secondary-tag match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MatchField {
    Handle,
    PrimaryTag,
    SecondaryTag,
}

impl MatchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchField::Handle => "handle",
            MatchField::PrimaryTag => "primaryTag",
            MatchField::SecondaryTag => "secondaryTag",
        }
    }

    /// Tier number (1 = handle, 2 = primary tag, 3 = secondary tag).
    pub fn tier(&self) -> u8 {
        match self {
            MatchField::Handle => 1,
            MatchField::PrimaryTag => 2,
            MatchField::SecondaryTag => 3,
        }
    }
}

// =============================================================================
// QUERY STATE
// =============================================================================

/// Parameters for one pipeline run.
///
/// Ephemeral: built by the caller for each query and dropped after. The engine
/// keeps nothing between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub platform: PlatformFilter,
    /// Empty means "no text filter".
    pub search_input: String,
    pub sort_by: SortBy,
    pub scope: SearchScope,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the three raw control values (platform, text, sort).
    pub fn from_params(platform: &str, search_input: &str, sort_by: &str) -> Self {
        Self {
            platform: PlatformFilter::parse(platform),
            search_input: search_input.to_string(),
            sort_by: SortBy::parse(sort_by),
            scope: SearchScope::All,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<PlatformFilter>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_search(mut self, search_input: impl Into<String>) -> Self {
        self.search_input = search_input.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// True when no text filter is active.
    pub fn has_search(&self) -> bool {
        !self.search_input.is_empty()
    }
}

impl From<&str> for PlatformFilter {
    fn from(value: &str) -> Self {
        PlatformFilter::parse(value)
    }
}
