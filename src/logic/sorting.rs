//! Sorting comparison logic
//!
//! Pure functions for ordering the filtered view across sort modes.

use crate::model::record::Record;
use crate::SortMode;
use std::cmp::Ordering;

/// Compare two records according to the given sort mode
///
/// # Sort Rules
/// - `Manual` treats every pair as equal so a stable sort keeps master order
/// - `Name` compares search text case-insensitively
/// - `Metric` puts the highest metric first, ties broken by name
/// - `reverse` flips the result (ignored for `Manual`)
pub fn compare_records<R: Record>(a: &R, b: &R, sort_mode: SortMode, reverse: bool) -> Ordering {
    let by_name = || {
        a.search_text()
            .to_lowercase()
            .cmp(&b.search_text().to_lowercase())
    };

    let result = match sort_mode {
        SortMode::Manual => return Ordering::Equal,
        SortMode::Name => by_name(),
        SortMode::Metric => {
            let a_metric = a.metric().unwrap_or(0.0);
            let b_metric = b.metric().unwrap_or(0.0);
            b_metric.total_cmp(&a_metric).then_with(by_name)
        }
    };

    if reverse {
        result.reverse()
    } else {
        result
    }
}

/// Sort a filtered view in place (stable, no-op for `Manual`)
pub fn sort_view<R: Record>(view: &mut [&R], sort_mode: SortMode, reverse: bool) {
    if sort_mode == SortMode::Manual {
        return;
    }
    view.sort_by(|a, b| compare_records(*a, *b, sort_mode, reverse));
}
