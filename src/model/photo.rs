//! Photo record
//!
//! Mirrors the JSON objects returned by `GET /photos`.

use serde::{Deserialize, Serialize};

/// A single photo from the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique within the collection
    pub id: u64,

    pub album_id: u64,

    pub title: String,

    /// Full-size image
    pub url: String,

    /// Grid-sized image
    pub thumbnail_url: String,
}

impl Photo {
    /// Placeholder constructor for locally built collections
    ///
    /// Image URLs point at `via.placeholder.com`, the host the
    /// jsonplaceholder API itself uses, and are derived from `id`. Photos
    /// fetched from an API come through `Deserialize` and keep their URLs.
    pub fn new(id: u64, album_id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            album_id,
            title: title.into(),
            url: format!("https://via.placeholder.com/600/{}", id),
            thumbnail_url: format!("https://via.placeholder.com/150/{}", id),
        }
    }
}
