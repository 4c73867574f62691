//! Pagination state
//!
//! Immutable snapshot of one page over a collection.

use crate::model::Photo;

use super::window::{clamp_page, page_window, total_pages};

/// One page over an ordered collection of photos
///
/// Only constructible through the reducers, which keep
/// `total_pages`, `visible` and `current_page` consistent with `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    items: Vec<Photo>,
    current_page: usize,
    per_page: usize,
    total_pages: usize,
    visible: Vec<Photo>,
}

impl PaginationState {
    /// Empty state used while the collection is loading
    ///
    /// `per_page` of 0 is bumped to 1.
    pub fn empty(per_page: usize) -> Self {
        Self::build(Vec::new(), 1, per_page.max(1))
    }

    /// Derive a state from owned items (per_page must be > 0)
    pub(crate) fn build(items: Vec<Photo>, page: usize, per_page: usize) -> Self {
        let total_pages = total_pages(items.len(), per_page);
        let current_page = clamp_page(page, total_pages);
        let (start, end) = page_window(items.len(), per_page, current_page);
        let visible = items[start..end].to_vec();

        Self {
            items,
            current_page,
            per_page,
            total_pages,
            visible,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Full ordered collection
    pub fn items(&self) -> &[Photo] {
        &self.items
    }

    /// One-based current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Slice shown on the current page
    pub fn visible(&self) -> &[Photo] {
        &self.visible
    }

    /// Number of items across all pages
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id anywhere in the collection
    pub fn find(&self, id: u64) -> Option<&Photo> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::empty(super::DEFAULT_PER_PAGE)
    }
}
