//! In-memory query engine for influencer collections.
//!
//! Given a collection of records and a [`QueryState`], produce a deterministic,
//! ordered result list. Fetching the collection and rendering the result are
//! someone else's problem; this crate only filters and ranks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   platform   │────▶│    tiered     │────▶│   ranking    │
//! │ (all = id,   │     │ (handle, tag, │     │ (relevance,  │
//! │  substring)  │     │  tags, dedup) │     │  followers)  │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                       │
//! │   (subsequence, no duplicates, tier order, stability)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stage borrows: input is `&[&Record]`, output is `Vec<&Record>`. The
//! source collection is never copied or mutated, and record identity is the
//! reference, not the value.
//!
//! # Usage
//!
//! ```
//! use scout::{run_query, parse_records, QueryState};
//!
//! let records = parse_records(r#"[
//!     {"handle": "joe", "platform": {"name": "instagram"}, "followers": 100},
//!     {"handle": "joan", "platform": {"name": "instagram"}, "followers": 10}
//! ]"#).unwrap();
//!
//! let state = QueryState::from_params("instagram", "jo", "followersAsc");
//! let results = run_query(&records, &state);
//!
//! assert_eq!(results[0].handle, "joan");
//! assert_eq!(results[1].handle, "joe");
//! ```

// Module declarations
pub mod contracts;
pub mod error;
mod query;
pub mod scoring;
pub mod search;
pub mod source;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use error::{Result, ScoutError};
pub use query::{run_query, run_query_refs};
pub use scoring::{apply_sort, compare_followers, Followers};
pub use search::{
    best_match_field, field_matches, filter_by_field, filter_by_platform, filter_by_search,
    filter_by_search_scoped, relevance_matches, FieldMatch, ResultMerger,
};
pub use source::{load_records, parse_records, read_records};
pub use types::{
    MatchField, Platform, PlatformFilter, PlatformKind, QueryState, Record, SearchScope, SortBy,
    Tag,
};
pub use utils::fold;
