use std::collections::HashMap;

use crate::models::MovieDetail;

/// Terminal outcome of a detail lookup, memoized per id.
///
/// Transport failures are deliberately not represented here: a failed fetch
/// is never cached, so collapsing and re-expanding the card retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRecord {
    Loaded(MovieDetail),
    /// The remote service answered, but knows nothing about this id.
    Unavailable,
}

/// Per-session memo of detail lookups. Once an id resolves, it is never
/// fetched again for the lifetime of the session, regardless of how often
/// the card is collapsed and re-expanded.
#[derive(Debug, Default)]
pub struct DetailCache {
    records: HashMap<String, DetailRecord>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&DetailRecord> {
        self.records.get(id)
    }

    pub fn insert(&mut self, id: String, record: DetailRecord) {
        self.records.insert(id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
