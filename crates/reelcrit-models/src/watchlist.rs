use serde::{Deserialize, Serialize};

/// A watchlist holds movie ids only; full records are resolved per id when
/// the list is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub movie_id: String,
}
