//! Summary aggregation
//!
//! Small folds used by the per-entity summary cards.

/// Sum an integer field over a dataset
pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(value).sum()
}

/// Count records matching a predicate
pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// Arithmetic mean, None for an empty dataset
pub fn average<T>(items: &[T], value: impl Fn(&T) -> f64) -> Option<f64> {
    if items.is_empty() {
        return None;
    }
    let total: f64 = items.iter().map(value).sum();
    Some(total / items.len() as f64)
}

/// Number of distinct values of a text field
pub fn distinct_count<T>(items: &[T], value: impl Fn(&T) -> &str) -> usize {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        seen.insert(value(item));
    }
    seen.len()
}

/// Item with the largest value (first one wins on ties)
pub fn max_by_value<T>(items: &[T], value: impl Fn(&T) -> i64) -> Option<&T> {
    let mut best: Option<(&T, i64)> = None;
    for item in items {
        let v = value(item);
        match best {
            Some((_, best_v)) if best_v >= v => {}
            _ => best = Some((item, v)),
        }
    }
    best.map(|(item, _)| item)
}

/// Group key with the largest summed value
///
/// Ties go to the key seen first; empty keys are skipped.
pub fn top_group_by<'a, T>(
    items: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
    value: impl Fn(&T) -> i64,
) -> Option<&'a str> {
    let mut totals: Vec<(&str, i64)> = Vec::new();
    for item in items {
        let k = key(item);
        if k.is_empty() {
            continue;
        }
        match totals.iter_mut().find(|(seen, _)| *seen == k) {
            Some((_, total)) => *total += value(item),
            None => totals.push((k, value(item))),
        }
    }
    max_by_value(&totals, |(_, total)| *total).map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_count() {
        let values = [3i64, 0, 12, 7];
        assert_eq!(sum_by(&values, |v| *v), 22);
        assert_eq!(count_where(&values, |v| *v > 5), 2);
    }

    #[test]
    fn test_average_empty_is_none() {
        let empty: [i64; 0] = [];
        assert_eq!(average(&empty, |v| *v as f64), None);
        assert_eq!(average(&[20i64, 30], |v| *v as f64), Some(25.0));
    }

    #[test]
    fn test_distinct_count() {
        let categories = ["Home", "Fashion", "Home", "Electronics"];
        assert_eq!(distinct_count(&categories, |c| *c), 3);
    }

    #[test]
    fn test_max_by_value_prefers_first_on_tie() {
        let values = [("a", 5i64), ("b", 9), ("c", 9)];
        assert_eq!(max_by_value(&values, |v| v.1).map(|v| v.0), Some("b"));
        let empty: [(&str, i64); 0] = [];
        assert!(max_by_value(&empty, |v| v.1).is_none());
    }

    #[test]
    fn test_top_group_by_sums_per_key() {
        let sales = [("North", 5i64), ("South", 4), ("", 50), ("South", 3), ("East", 7)];
        assert_eq!(top_group_by(&sales, |s| s.0, |s| s.1), Some("South"));

        let tied = [("West", 5i64), ("North", 5)];
        assert_eq!(top_group_by(&tied, |s| s.0, |s| s.1), Some("West"));

        let empty: [(&str, i64); 0] = [];
        assert_eq!(top_group_by(&empty, |s| s.0, |s| s.1), None);
    }
}
