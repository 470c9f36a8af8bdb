//! Type-erased table pages
//!
//! The renderer and key handlers hold pages as `&dyn TablePage`, so they
//! never need to know which record type a page stores.

use super::columns::TableConfig;
use super::controller::TableController;
use crate::export::{ExportArtifact, ExportScope};
use crate::model::record::{FieldValue, Record, SummaryCard};
use crate::model::view::ViewState;
use crate::SortMode;

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub label: String,
    /// One entry per configured column, None for unknown keys
    pub cells: Vec<Option<FieldValue>>,
    pub selected: bool,
}

pub trait TablePage {
    fn config(&self) -> &TableConfig;
    fn view(&self) -> &ViewState;
    fn sort_mode(&self) -> SortMode;
    fn sort_reverse(&self) -> bool;
    fn total_len(&self) -> usize;
    fn filtered_len(&self) -> usize;
    fn page_count(&self) -> usize;
    fn cursor(&self) -> usize;
    fn page_rows(&self) -> Vec<RowView>;
    fn cursor_row(&self) -> Option<RowView>;
    fn selected_count(&self) -> usize;
    fn summary(&self) -> Vec<SummaryCard>;
    fn chart_points(&self) -> Vec<(String, u64)>;

    fn set_query(&mut self, query: &str);
    fn cycle_facet(&mut self);
    fn cycle_sort(&mut self);
    fn toggle_reverse(&mut self);
    fn next_page(&mut self) -> bool;
    fn prev_page(&mut self) -> bool;
    fn cycle_page_size(&mut self);
    fn cursor_down(&mut self);
    fn cursor_up(&mut self);
    fn cursor_first(&mut self);
    fn cursor_last(&mut self);
    fn focus(&mut self, id: &str) -> bool;
    fn toggle_cursor_selected(&mut self);
    fn toggle_all_in_view(&mut self) -> bool;
    fn clear_selection(&mut self);
    fn delete(&mut self, id: &str) -> bool;
    fn bulk_delete(&mut self) -> usize;
    fn reorder(&mut self, source_id: &str, target_id: &str) -> bool;
    fn move_cursor_up(&mut self) -> bool;
    fn move_cursor_down(&mut self) -> bool;
    fn export(&self, scope: ExportScope) -> ExportArtifact;
}

impl<R: Record> TableController<R> {
    fn row_view(&self, record: &R) -> RowView {
        RowView {
            id: record.id().to_string(),
            label: record.search_text().to_string(),
            cells: self
                .config()
                .columns
                .iter()
                .map(|c| record.field(&c.key))
                .collect(),
            selected: self.selection().is_selected(record.id()),
        }
    }
}

impl<R: Record> TablePage for TableController<R> {
    fn config(&self) -> &TableConfig {
        TableController::config(self)
    }

    fn view(&self) -> &ViewState {
        TableController::view(self)
    }

    fn sort_mode(&self) -> SortMode {
        TableController::sort_mode(self)
    }

    fn sort_reverse(&self) -> bool {
        TableController::sort_reverse(self)
    }

    fn total_len(&self) -> usize {
        self.records().len()
    }

    fn filtered_len(&self) -> usize {
        TableController::filtered_len(self)
    }

    fn page_count(&self) -> usize {
        TableController::page_count(self)
    }

    fn cursor(&self) -> usize {
        TableController::cursor(self)
    }

    fn page_rows(&self) -> Vec<RowView> {
        self.page().into_iter().map(|r| self.row_view(r)).collect()
    }

    fn cursor_row(&self) -> Option<RowView> {
        self.cursor_record().map(|r| self.row_view(r))
    }

    fn selected_count(&self) -> usize {
        TableController::selected_count(self)
    }

    fn summary(&self) -> Vec<SummaryCard> {
        TableController::summary(self)
    }

    fn chart_points(&self) -> Vec<(String, u64)> {
        TableController::chart_points(self)
    }

    fn set_query(&mut self, query: &str) {
        TableController::set_query(self, query)
    }

    fn cycle_facet(&mut self) {
        TableController::cycle_facet(self)
    }

    fn cycle_sort(&mut self) {
        TableController::cycle_sort(self)
    }

    fn toggle_reverse(&mut self) {
        TableController::toggle_reverse(self)
    }

    fn next_page(&mut self) -> bool {
        TableController::next_page(self)
    }

    fn prev_page(&mut self) -> bool {
        TableController::prev_page(self)
    }

    fn cycle_page_size(&mut self) {
        TableController::cycle_page_size(self)
    }

    fn cursor_down(&mut self) {
        TableController::cursor_down(self)
    }

    fn cursor_up(&mut self) {
        TableController::cursor_up(self)
    }

    fn cursor_first(&mut self) {
        TableController::cursor_first(self)
    }

    fn cursor_last(&mut self) {
        TableController::cursor_last(self)
    }

    fn focus(&mut self, id: &str) -> bool {
        TableController::focus(self, id)
    }

    fn toggle_cursor_selected(&mut self) {
        TableController::toggle_cursor_selected(self)
    }

    fn toggle_all_in_view(&mut self) -> bool {
        TableController::toggle_all_in_view(self)
    }

    fn clear_selection(&mut self) {
        TableController::clear_selection(self)
    }

    fn delete(&mut self, id: &str) -> bool {
        TableController::delete(self, id).is_some()
    }

    fn bulk_delete(&mut self) -> usize {
        TableController::bulk_delete(self)
    }

    fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        TableController::reorder(self, source_id, target_id)
    }

    fn move_cursor_up(&mut self) -> bool {
        TableController::move_cursor_up(self)
    }

    fn move_cursor_down(&mut self) -> bool {
        TableController::move_cursor_down(self)
    }

    fn export(&self, scope: ExportScope) -> ExportArtifact {
        TableController::export(self, scope)
    }
}
