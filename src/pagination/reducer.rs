//! Pagination reducers
//!
//! Pure functions from (state, action) to a new state.

use serde_json::Value;

use crate::error::{PagerError, Result};
use crate::model::{Photo, SortKey};
use crate::protocol::decode_photos_value;

use super::PaginationState;

/// Paginate a collection
///
/// Errors with `InvalidInput` when `page` or `per_page` is zero. Pages past
/// the end are clamped to the last page.
pub fn paginate(items: Vec<Photo>, page: usize, per_page: usize) -> Result<PaginationState> {
    if per_page == 0 {
        return Err(PagerError::InvalidInput(
            "per_page must be greater than 0".to_string(),
        ));
    }
    if page == 0 {
        return Err(PagerError::InvalidInput(
            "page numbers start at 1".to_string(),
        ));
    }
    Ok(PaginationState::build(items, page, per_page))
}

/// Paginate an untyped JSON document
///
/// The document must be an array of photo objects, anything else is
/// `InvalidInput`.
pub fn paginate_json(value: &Value, page: usize, per_page: usize) -> Result<PaginationState> {
    let items = decode_photos_value(value)?;
    paginate(items, page, per_page)
}

/// Move to another page; `items` and `per_page` are untouched
pub fn change_page(state: &PaginationState, page: usize) -> PaginationState {
    PaginationState::build(state.items().to_vec(), page, state.per_page())
}

/// Drop the item with `id` and re-paginate at the current page
///
/// Unknown ids return an identical state. When the last item of the last
/// page goes away the page moves back so it still points at real data.
pub fn remove(state: &PaginationState, id: u64) -> PaginationState {
    if state.find(id).is_none() {
        return state.clone();
    }
    let items: Vec<Photo> = state.items().iter().filter(|p| p.id != id).cloned().collect();
    PaginationState::build(items, state.current_page(), state.per_page())
}

/// Stable sort by `key`, back to page 1
pub fn sort_by(state: &PaginationState, key: SortKey) -> PaginationState {
    let mut items = state.items().to_vec();
    match key {
        SortKey::Id => items.sort_by_key(|p| p.id),
        SortKey::Album => items.sort_by_key(|p| p.album_id),
        SortKey::Title => items.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    PaginationState::build(items, 1, state.per_page())
}
