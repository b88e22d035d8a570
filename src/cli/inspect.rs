//! Collection summary for `scout inspect`.

use scout::{PlatformKind, Record};
use serde::Serialize;

/// Record count for one platform name.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlatformCount {
    pub name: String,
    pub label: String,
    pub count: usize,
}

/// Shape of a record collection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    /// Known platforms first (selector order), then unknown names as seen.
    pub platforms: Vec<PlatformCount>,
    pub without_primary_tag: usize,
    pub without_tags: usize,
    pub min_followers: Option<u64>,
    pub max_followers: Option<u64>,
}

pub fn summarize(records: &[Record]) -> Summary {
    let mut platforms: Vec<PlatformCount> = PlatformKind::ALL
        .iter()
        .map(|kind| PlatformCount {
            name: kind.as_str().to_string(),
            label: kind.label().to_string(),
            count: 0,
        })
        .collect();

    for record in records {
        let name = record.platform.name.as_str();
        match platforms.iter_mut().find(|p| p.name == name) {
            Some(entry) => entry.count += 1,
            None => platforms.push(PlatformCount {
                name: name.to_string(),
                label: name.to_string(),
                count: 1,
            }),
        }
    }

    Summary {
        total: records.len(),
        platforms,
        without_primary_tag: records.iter().filter(|r| r.primary_tag.is_none()).count(),
        without_tags: records.iter().filter(|r| r.tags.is_empty()).count(),
        min_followers: records.iter().map(|r| r.followers).min(),
        max_followers: records.iter().map(|r| r.followers).max(),
    }
}
