//! Tests for row reordering
//!
//! Semantics: remove the source, then reinsert it directly before the
//! target. For `[A,B,C,D]`, moving A onto C gives `[B,A,C,D]` (a naive
//! swap would give `[C,B,A,D]`).

use std::collections::BTreeSet;

use dashtui::dataset::{Column, ColumnFormat, TableConfig, TableController};
use dashtui::logic::reorder::reorder;
use dashtui::model::record::{FieldValue, Record};
use dashtui::SortMode;

#[derive(Clone, Debug, PartialEq)]
struct Tag(String);

impl Record for Tag {
    fn id(&self) -> &str {
        &self.0
    }

    fn search_text(&self) -> &str {
        &self.0
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        (key == "id").then(|| self.0.as_str().into())
    }
}

fn tags(ids: &[&str]) -> Vec<Tag> {
    ids.iter().map(|id| Tag(id.to_string())).collect()
}

fn order(list: &[Tag]) -> Vec<&str> {
    list.iter().map(|t| t.0.as_str()).collect()
}

#[test]
fn test_move_down_lands_before_target() {
    let mut list = tags(&["A", "B", "C", "D"]);
    assert!(reorder(&mut list, "A", "C"));
    assert_eq!(order(&list), vec!["B", "A", "C", "D"]);
}

#[test]
fn test_move_up_lands_before_target() {
    let mut list = tags(&["A", "B", "C", "D"]);
    assert!(reorder(&mut list, "D", "A"));
    assert_eq!(order(&list), vec!["D", "A", "B", "C"]);
}

#[test]
fn test_reorder_preserves_membership() {
    let ids = ["A", "B", "C", "D", "E"];
    for source in ids {
        for target in ids {
            if source == target {
                continue;
            }
            let mut list = tags(&ids);
            reorder(&mut list, source, target);

            assert_eq!(list.len(), ids.len());
            let members: BTreeSet<&str> = order(&list).into_iter().collect();
            let expected: BTreeSet<&str> = ids.into_iter().collect();
            assert_eq!(members, expected, "{} -> {}", source, target);
        }
    }
}

#[test]
fn test_no_op_moves_report_unchanged() {
    let mut list = tags(&["A", "B", "C"]);
    assert!(!reorder(&mut list, "B", "B"));
    assert!(!reorder(&mut list, "A", "Z"));
    assert!(!reorder(&mut list, "Z", "A"));
    // A already sits directly before B
    assert!(!reorder(&mut list, "A", "B"));
    assert_eq!(order(&list), vec!["A", "B", "C"]);
}

fn controller() -> TableController<Tag> {
    let config = TableConfig::builder("Tags")
        .column(Column::new("id", "Tag", ColumnFormat::Text))
        .page_size(2)
        .build();
    TableController::new(config, tags(&["A", "B", "C", "D", "E"]))
}

#[test]
fn test_step_moves_follow_the_row_across_pages() {
    let mut c = controller();
    // Cursor on B (page 0, row 1), move it down past C onto page 1
    c.cursor_down();
    assert!(c.move_cursor_down());
    assert_eq!(order(c.records()), vec!["A", "C", "B", "D", "E"]);
    assert_eq!(c.view().page_index, 1);
    assert_eq!(c.cursor_record().map(|t| t.0.as_str()), Some("B"));

    assert!(c.move_cursor_up());
    assert_eq!(order(c.records()), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(c.cursor_record().map(|t| t.0.as_str()), Some("B"));
}

#[test]
fn test_step_moves_stop_at_the_ends() {
    let mut c = controller();
    assert!(!c.move_cursor_up());
    c.cursor_last();
    assert!(!c.move_cursor_down());
    assert_eq!(order(c.records()), vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_reorder_under_filter_uses_master_positions() {
    let mut c = controller();
    c.set_query("e");
    // Only E is visible; moving it before A still works on the master list
    assert!(c.reorder("E", "A"));
    assert_eq!(order(c.records()), vec!["E", "A", "B", "C", "D"]);
    c.set_sort(SortMode::Name, true);
    assert_eq!(c.visible().len(), 1);
}
