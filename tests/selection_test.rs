//! Tests for selection and bulk delete
//!
//! Selection is keyed by record id, so it survives filtering, sorting and
//! paging. Bulk delete removes exactly the selected ids and empties the
//! selection; a second bulk delete removes nothing.

use dashtui::dataset::{Column, ColumnFormat, SelectionSet, TableConfig, TableController};
use dashtui::model::record::{FieldValue, Record};
use dashtui::SortMode;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: String,
    name: String,
}

impl Record for Row {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

fn controller(count: usize, page_size: usize) -> TableController<Row> {
    let rows = (1..=count)
        .map(|i| Row {
            id: format!("id{}", i),
            name: format!("Row {}", i),
        })
        .collect();
    let config = TableConfig::builder("Rows")
        .column(Column::new("name", "Name", ColumnFormat::Text))
        .page_size(page_size)
        .build();
    TableController::new(config, rows)
}

fn ids(c: &TableController<Row>) -> Vec<&str> {
    c.records().iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_bulk_delete_removes_exactly_selected() {
    let mut c = controller(5, 10);
    c.toggle_selected("id2");
    c.toggle_selected("id4");

    assert_eq!(c.bulk_delete(), 2);
    assert_eq!(ids(&c), vec!["id1", "id3", "id5"]);
    assert!(c.selection().is_empty());
    assert_eq!(c.selected_count(), 0);

    // Nothing selected any more
    assert_eq!(c.bulk_delete(), 0);
    assert_eq!(ids(&c), vec!["id1", "id3", "id5"]);
}

#[test]
fn test_deselected_ids_are_kept() {
    let mut c = controller(5, 10);
    c.toggle_selected("id2");
    c.toggle_selected("id3");
    c.toggle_selected("id3");

    assert_eq!(c.bulk_delete(), 1);
    assert_eq!(ids(&c), vec!["id1", "id3", "id4", "id5"]);
}

#[test]
fn test_selection_survives_filter_and_sort() {
    let mut c = controller(12, 5);
    c.toggle_selected("id11");
    c.set_query("row 1");
    c.set_sort(SortMode::Name, true);
    c.set_query("");

    assert!(c.selection().is_selected("id11"));
    assert_eq!(c.bulk_delete(), 1);
    assert_eq!(c.records().len(), 11);
}

#[test]
fn test_select_all_covers_every_page_of_the_view() {
    let mut c = controller(12, 5);
    c.set_query("row 1");
    // Row 1, Row 10, Row 11, Row 12
    assert!(c.toggle_all_in_view());
    assert_eq!(c.selected_count(), 4);

    // Second press clears them again
    assert!(!c.toggle_all_in_view());
    assert_eq!(c.selected_count(), 0);
}

#[test]
fn test_bulk_delete_clamps_page() {
    let mut c = controller(12, 5);
    c.next_page();
    c.next_page();
    for id in ["id6", "id7", "id8", "id9", "id10", "id11", "id12"] {
        c.toggle_selected(id);
    }
    c.bulk_delete();
    assert_eq!(c.records().len(), 5);
    assert_eq!(c.view().page_index, 0);
    assert_eq!(c.cursor(), 0);
}

#[test]
fn test_selection_set_toggle_all() {
    let mut set = SelectionSet::new();
    set.set("a", true);
    // Not everything selected yet: select all
    assert!(set.toggle_all(["a", "b"]));
    assert!(set.is_selected("a") && set.is_selected("b"));
    // Everything selected: deselect all
    assert!(!set.toggle_all(["a", "b"]));
    assert_eq!(set.count(), 0);
}
