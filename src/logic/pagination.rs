//! Pagination logic
//!
//! Pure functions for slicing a view into fixed-size pages.

/// Number of pages for a view, never less than 1
///
/// An empty view still shows as "Page 1 of 1".
///
/// # Examples
/// ```
/// use dashtui::logic::pagination::page_count;
///
/// assert_eq!(page_count(0, 10), 1);
/// assert_eq!(page_count(10, 10), 1);
/// assert_eq!(page_count(11, 10), 2);
/// assert_eq!(page_count(20, 6), 4);
/// ```
pub fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Slice `[page_index * page_size, (page_index + 1) * page_size)` of a view
///
/// Out-of-range pages yield an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pull a page index back into range after the view shrinks
pub fn clamp_page_index(page_index: usize, len: usize, page_size: usize) -> usize {
    page_index.min(page_count(len, page_size) - 1)
}
