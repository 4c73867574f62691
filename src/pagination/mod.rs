//! Pagination Module
//!
//! Client-side paging over an already fetched collection.
//!
//! ## Responsibilities
//! - Derive the visible slice and page count from (items, page, per_page)
//! - Re-slice on page change, re-paginate on delete, reorder on sort
//! - Keep `1 <= current_page <= max(total_pages, 1)` after every reducer
//!
//! ## Model
//! ```text
//!   items:   [p1 p2 p3 | p4 p5 p6 | p7]      per_page = 3
//!             page 1     page 2     page 3   total_pages = 3
//!   visible: items[(page-1)*per_page .. page*per_page]
//! ```
//!
//! Reducers never mutate their input. Each takes `&PaginationState` and
//! returns a fresh value, so a view can hold on to an old state while a
//! new one is computed.

mod state;
mod window;
mod reducer;

pub use state::PaginationState;
pub use window::{clamp_page, page_window, total_pages};
pub use reducer::{change_page, paginate, paginate_json, remove, sort_by};

/// Page size used when the caller does not pick one
pub const DEFAULT_PER_PAGE: usize = 10;
