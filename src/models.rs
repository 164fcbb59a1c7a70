use serde::{Deserialize, Serialize};

/// Minimal record produced by a title search. Immutable once received;
/// the whole result set is replaced wholesale on the next search.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub kind: String,
    pub poster_url: Option<String>,
}

/// Extended record produced by an id lookup. Fetched lazily on first card
/// expansion, at most once per id, and never mutated after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MovieDetail {
    pub id: String,
    pub plot: Option<String>,
    pub rating: Option<String>,
    pub actors: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
}

/// User-curated reference to a movie, independent of any result set.
/// Fields are copied from the summary at add time, not referenced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub id: String,
    pub title: String,
    pub poster_url: Option<String>,
}
