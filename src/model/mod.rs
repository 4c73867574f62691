//! Model Module
//!
//! Records and ordering/selection settings shared by every layer.
//!
//! ## Contents
//! - `Photo`: one record from the remote collection, identity = `id`
//! - `SortKey`: orderings supported by the pagination reducers
//! - `Filter`: album/title predicate applied to the full collection

mod photo;
mod filter;

pub use photo::Photo;
pub use filter::Filter;

/// Orderings supported by `sort_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Fetch order (ascending id)
    #[default]
    Id,

    /// Ascending album id
    Album,

    /// Lexicographically ascending title
    Title,
}

impl std::str::FromStr for SortKey {
    type Err = crate::PagerError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "album" => Ok(SortKey::Album),
            "title" => Ok(SortKey::Title),
            other => Err(crate::PagerError::InvalidInput(format!(
                "Unknown sort key: {}",
                other
            ))),
        }
    }
}
