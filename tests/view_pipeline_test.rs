//! Tests for the filter → sort → paginate pipeline
//!
//! The view is always derived from the master list:
//! - Filtering twice with the same query/facet gives the same rows
//! - Filtering keeps master order (no sort applied in manual mode)
//! - Pages partition the filtered view with no gaps or overlap
//! - An out-of-range page index yields an empty page, not a panic

use dashtui::dataset::{Column, ColumnFormat, TableConfig, TableController, TablePage};
use dashtui::logic::pagination::{page_count, paginate};
use dashtui::logic::search::filter_records;
use dashtui::model::record::{FieldValue, Record};
use dashtui::model::view::{Facet, ViewState};
use dashtui::SortMode;

#[derive(Clone, Debug, PartialEq)]
struct Item {
    id: String,
    name: String,
    kind: String,
    score: i64,
}

impl Record for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn facet(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "kind" => Some(self.kind.as_str().into()),
            "score" => Some(self.score.into()),
            _ => None,
        }
    }

    fn metric(&self) -> Option<f64> {
        Some(self.score as f64)
    }
}

/// 23 items: names alternate "Red n"/"Blue n", kinds cycle a/b/c
fn items() -> Vec<Item> {
    (0..23)
        .map(|i| Item {
            id: format!("i{:02}", i),
            name: format!("{} {}", if i % 2 == 0 { "Red" } else { "Blue" }, i),
            kind: ["a", "b", "c"][i % 3].to_string(),
            score: ((i * 17) % 11) as i64,
        })
        .collect()
}

fn controller(page_size: usize) -> TableController<Item> {
    let config = TableConfig::builder("Items")
        .column(Column::new("name", "Name", ColumnFormat::Text))
        .column(Column::new("score", "Score", ColumnFormat::Integer))
        .facet("Kind", &["a", "b", "c"])
        .page_size(page_size)
        .build();
    TableController::new(config, items())
}

fn ids<'a>(rows: impl IntoIterator<Item = &'a Item>) -> Vec<String> {
    rows.into_iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_filtering_is_idempotent() {
    let records = items();
    let facet = Facet::parse("b");

    let once: Vec<Item> = filter_records(&records, "red", &facet).cloned().collect();
    let twice: Vec<Item> = filter_records(&once, "red", &facet).cloned().collect();

    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[test]
fn test_filtering_keeps_master_order() {
    let mut c = controller(10);
    c.set_query("blue");

    let visible = ids(c.visible());
    let master = ids(c.records());
    // Visible ids appear in master in the same relative order
    let mut positions = visible
        .iter()
        .map(|id| master.iter().position(|m| m == id).unwrap());
    let mut last = positions.next().unwrap();
    for pos in positions {
        assert!(pos > last, "filtered view reordered records: {:?}", visible);
        last = pos;
    }
}

#[test]
fn test_pages_partition_filtered_view() {
    let records = items();
    let filtered: Vec<&Item> = filter_records(&records, "", &Facet::parse("a")).collect();

    for size in 1..=9 {
        let pages = page_count(filtered.len(), size);
        let rejoined: Vec<&Item> = (0..pages)
            .flat_map(|p| paginate(&filtered, p, size).iter().copied())
            .collect();
        assert_eq!(ids(rejoined), ids(filtered.iter().copied()), "page size {}", size);
    }
}

#[test]
fn test_controller_pages_partition_sorted_view() {
    let mut c = controller(4);
    c.set_sort(SortMode::Metric, false);

    let expected = ids(c.visible());
    let mut seen = Vec::new();
    loop {
        seen.extend(ids(c.page()));
        if !c.next_page() {
            break;
        }
    }
    assert_eq!(seen, expected);
    assert_eq!(TableController::page_count(&c), 6);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let five: Vec<Item> = items().into_iter().take(5).collect();
    assert!(paginate(&five, 100, 10).is_empty());

    let mut c = controller(10);
    c.set_view(ViewState::new(10).with_page(100));
    assert!(c.page().is_empty());
    assert!(c.page_rows().is_empty());
    assert!(c.cursor_row().is_none());
}

#[test]
fn test_query_change_returns_to_first_page() {
    let mut c = controller(5);
    c.next_page();
    c.next_page();
    assert_eq!(c.view().page_index, 2);

    c.set_query("red");
    assert_eq!(c.view().page_index, 0);
    // 12 "Red" items over pages of 5
    assert_eq!(TableController::filtered_len(&c), 12);
    assert_eq!(TableController::page_count(&c), 3);
}
