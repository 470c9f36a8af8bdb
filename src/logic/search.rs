//! Search Logic
//!
//! Pure functions for narrowing a dataset by free-text query and facet.
//! Filtering is lazy and stable: records come out in master order.

use crate::model::record::Record;
use crate::model::view::Facet;

/// Match a search query against a record's search text
///
/// # Rules
/// - Matches are case-insensitive substring matches
/// - An empty query matches everything
///
/// # Examples
/// ```
/// use dashtui::logic::search::search_matches;
///
/// assert!(search_matches("", "Wireless Headphones"));
/// assert!(search_matches("head", "Wireless Headphones"));
/// assert!(search_matches("WIRE", "Wireless Headphones"));
/// assert!(!search_matches("watch", "Wireless Headphones"));
/// ```
pub fn search_matches(query: &str, text: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Lazily filter records by query and facet
///
/// The returned iterator borrows the master slice and yields matching
/// records in their master order. Calling it twice with the same
/// arguments yields the same sequence. Only `records` is borrowed by the
/// iterator; the facet is copied in.
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    query: &str,
    facet: &Facet,
) -> impl Iterator<Item = &'a R> + 'a {
    let query_lower = query.to_lowercase();
    let facet = facet.clone();

    records.iter().filter(move |record| {
        facet.matches(record.facet())
            && (query_lower.is_empty()
                || record.search_text().to_lowercase().contains(&query_lower))
    })
}
