//! Collection filter
//!
//! Narrows the full collection before it is paginated.

use super::Photo;

/// Predicate over photos; an empty filter matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Keep only this album
    pub album_id: Option<u64>,

    /// Keep titles containing this text (case-insensitive)
    pub title_contains: Option<String>,
}

impl Filter {
    /// Filter on a single album
    pub fn album(album_id: u64) -> Self {
        Self {
            album_id: Some(album_id),
            title_contains: None,
        }
    }

    /// Filter on a title substring
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            album_id: None,
            title_contains: Some(text.into()),
        }
    }

    /// True if no predicate is set
    pub fn is_empty(&self) -> bool {
        self.album_id.is_none() && self.title_contains.is_none()
    }

    /// Check a single photo
    pub fn matches(&self, photo: &Photo) -> bool {
        if let Some(album_id) = self.album_id {
            if photo.album_id != album_id {
                return false;
            }
        }
        match &self.title_contains {
            Some(needle) => photo
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Apply to a collection, preserving order
    pub fn apply(&self, photos: &[Photo]) -> Vec<Photo> {
        photos.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
