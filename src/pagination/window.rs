//! Page math
//!
//! One-based pages, saturating arithmetic throughout.

/// Number of pages needed for `item_count` items
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Bound a page into `1..=max(total_pages, 1)`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Start/end indices of a page inside a collection of `total_items`
///
/// Pages past the end yield an empty `(total_items, total_items)` window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let end = start.saturating_add(per_page).min(total_items);
    (start.min(total_items), end)
}
