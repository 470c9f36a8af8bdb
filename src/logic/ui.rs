//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::model::view::Facet;
use crate::SortMode;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZES: [usize; 4] = [10, 20, 30, 50];

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Cycle to the next sort mode: Manual → A-Z → Metric → Manual
///
/// # Examples
/// ```
/// use dashtui::SortMode;
/// use dashtui::logic::ui::cycle_sort_mode;
///
/// assert_eq!(cycle_sort_mode(SortMode::Manual), SortMode::Name);
/// assert_eq!(cycle_sort_mode(SortMode::Name), SortMode::Metric);
/// assert_eq!(cycle_sort_mode(SortMode::Metric), SortMode::Manual);
/// ```
pub fn cycle_sort_mode(current: SortMode) -> SortMode {
    match current {
        SortMode::Manual => SortMode::Name,
        SortMode::Name => SortMode::Metric,
        SortMode::Metric => SortMode::Manual,
    }
}

/// Next entry of the page-size selector
///
/// Sizes not on the selector (e.g. the report page's 6) jump to the first
/// selector size larger than them, wrapping to the smallest.
pub fn next_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|size| *size > current)
        .unwrap_or(PAGE_SIZES[0])
}

/// Cycle a facet filter: All → first value → ... → last value → All
pub fn cycle_facet(current: &Facet, values: &[String]) -> Facet {
    let next = match current {
        Facet::All => values.first(),
        Facet::Value(value) => values
            .iter()
            .position(|v| v == value)
            .and_then(|idx| values.get(idx + 1)),
    };

    match next {
        Some(value) => Facet::Value(value.clone()),
        None => Facet::All,
    }
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
