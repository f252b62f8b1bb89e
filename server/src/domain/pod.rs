//! Pod Entity
//!
//! A pod is a short text note. Ids are assigned by the store in creation
//! order and never reused; titles are immutable after creation.

use serde::{Deserialize, Serialize};

/// A single note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    /// Unique identifier, strictly increasing in creation order
    pub id: u32,
    /// Note text
    pub title: String,
}

impl Pod {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Display order requested by a list query
///
/// The wire token maps onto the id ordering; unrecognized tokens fall back
/// to newest-first, matching the default list behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Descending by id
    #[default]
    NewestFirst,
    /// Ascending by id
    OldestFirst,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newestFirst",
            SortOrder::OldestFirst => "oldestFirst",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "oldestFirst" => SortOrder::OldestFirst,
            _ => SortOrder::NewestFirst,
        }
    }
}
