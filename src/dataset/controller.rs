//! Generic table controller
//!
//! One [`TableController`] owns a page's master list, its selection and
//! its view parameters. Every admin page is an instance of it; only the
//! [`TableConfig`] and the record type differ.

use tracing::debug;

use super::columns::{ChartSource, TableConfig};
use super::selection::SelectionSet;
use crate::export::{build_artifact, ExportArtifact, ExportScope};
use crate::logic::navigation::{clamp_cursor, cursor_down, cursor_up, CursorMove};
use crate::logic::pagination::{clamp_page_index, page_count, paginate};
use crate::logic::reorder;
use crate::logic::search::filter_records;
use crate::logic::sorting::sort_view;
use crate::logic::ui::{cycle_facet, cycle_sort_mode, next_page_size};
use crate::model::record::{Record, SummaryCard};
use crate::model::view::{Facet, ViewState};
use crate::SortMode;

#[derive(Debug, Clone)]
pub struct TableController<R: Record> {
    config: TableConfig,
    records: Vec<R>,
    selection: SelectionSet,
    view: ViewState,
    sort_mode: SortMode,
    sort_reverse: bool,
    /// Row index within the current page
    cursor: usize,
}

impl<R: Record> TableController<R> {
    pub fn new(config: TableConfig, records: Vec<R>) -> Self {
        let view = ViewState::new(config.page_size);
        Self {
            config,
            records,
            selection: SelectionSet::new(),
            view,
            sort_mode: SortMode::Manual,
            sort_reverse: false,
            cursor: 0,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Master list in its current (manual) order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn sort_reverse(&self) -> bool {
        self.sort_reverse
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // ============================================
    // VIEW PIPELINE
    // ============================================

    /// Records passing the query and facet, in master order (lazy)
    pub fn filtered(&self) -> impl Iterator<Item = &R> + '_ {
        filter_records(&self.records, &self.view.query, &self.view.facet)
    }

    /// Filtered records in display order, across all pages
    pub fn visible(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self.filtered().collect();
        sort_view(&mut rows, self.sort_mode, self.sort_reverse);
        rows
    }

    /// Rows of the current page
    pub fn page(&self) -> Vec<&R> {
        let rows = self.visible();
        paginate(&rows, self.view.page_index, self.view.page_size).to_vec()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered_len(), self.view.page_size)
    }

    pub fn cursor_record(&self) -> Option<&R> {
        self.page().get(self.cursor).copied()
    }

    /// Replace the view parameters wholesale
    ///
    /// No clamping: an out-of-range page index renders as an empty page.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = ViewState {
            page_size: view.page_size.max(1),
            ..view
        };
        self.cursor = 0;
    }

    pub fn set_query(&mut self, query: &str) {
        if self.view.query == query {
            return;
        }
        self.view.query = query.to_string();
        self.reset_to_first_page();
    }

    pub fn set_facet(&mut self, facet: Facet) {
        if self.view.facet == facet {
            return;
        }
        self.view.facet = facet;
        self.reset_to_first_page();
    }

    /// All → first facet value → ... → All
    pub fn cycle_facet(&mut self) {
        let next = cycle_facet(&self.view.facet, &self.config.facet_values);
        self.set_facet(next);
    }

    pub fn set_sort(&mut self, mode: SortMode, reverse: bool) {
        self.sort_mode = mode;
        self.sort_reverse = reverse;
        self.clamp();
    }

    pub fn cycle_sort(&mut self) {
        self.sort_mode = cycle_sort_mode(self.sort_mode);
        self.sort_reverse = false;
        self.clamp();
    }

    pub fn toggle_reverse(&mut self) {
        self.sort_reverse = !self.sort_reverse;
    }

    pub fn next_page(&mut self) -> bool {
        if self.view.page_index + 1 >= self.page_count() {
            return false;
        }
        self.view.page_index += 1;
        self.cursor = 0;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if self.view.page_index == 0 {
            return false;
        }
        self.view.page_index = clamp_page_index(
            self.view.page_index - 1,
            self.filtered_len(),
            self.view.page_size,
        );
        self.cursor = 0;
        true
    }

    /// Change the page size, keeping the first row of the page in view
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let first_row = self.view.page_index * self.view.page_size;
        self.view.page_size = page_size;
        self.view.page_index = first_row / page_size;
        self.clamp();
    }

    pub fn cycle_page_size(&mut self) {
        self.set_page_size(next_page_size(self.view.page_size));
    }

    fn reset_to_first_page(&mut self) {
        self.view.page_index = 0;
        self.cursor = 0;
    }

    /// Pull page index and cursor back into range
    fn clamp(&mut self) {
        self.view.page_index =
            clamp_page_index(self.view.page_index, self.filtered_len(), self.view.page_size);
        self.cursor = clamp_cursor(self.cursor, self.page().len());
    }

    // ============================================
    // CURSOR
    // ============================================

    pub fn cursor_down(&mut self) {
        let page_len = self.page().len();
        let has_next = self.view.page_index + 1 < self.page_count();
        match cursor_down(self.cursor, page_len, has_next) {
            CursorMove::Row(row) => self.cursor = row,
            CursorMove::NextPage => {
                self.view.page_index += 1;
                self.cursor = 0;
            }
            CursorMove::PrevPage | CursorMove::Stay => {}
        }
    }

    pub fn cursor_up(&mut self) {
        match cursor_up(self.cursor, self.view.page_index > 0) {
            CursorMove::Row(row) => self.cursor = row,
            CursorMove::PrevPage => {
                self.view.page_index -= 1;
                self.cursor = self.page().len().saturating_sub(1);
            }
            CursorMove::NextPage | CursorMove::Stay => {}
        }
    }

    pub fn cursor_first(&mut self) {
        self.view.page_index = 0;
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.view.page_index = self.page_count() - 1;
        self.cursor = self.page().len().saturating_sub(1);
    }

    /// Put the cursor on a record, switching page if needed
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(pos) = self.visible().iter().position(|r| r.id() == id) else {
            return false;
        };
        self.view.page_index = pos / self.view.page_size;
        self.cursor = pos % self.view.page_size;
        true
    }

    // ============================================
    // SELECTION
    // ============================================

    pub fn toggle_selected(&mut self, id: &str) {
        if self.records.iter().any(|r| r.id() == id) {
            self.selection.toggle(id);
        }
    }

    pub fn toggle_cursor_selected(&mut self) {
        if let Some(id) = self.cursor_record().map(|r| r.id().to_string()) {
            self.selection.toggle(&id);
        }
    }

    /// Select (or deselect) the whole filtered view, every page included
    pub fn toggle_all_in_view(&mut self) -> bool {
        let ids: Vec<String> = self.filtered().map(|r| r.id().to_string()).collect();
        self.selection.toggle_all(ids.iter().map(String::as_str))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.selection.count()
    }

    // ============================================
    // MUTATIONS
    // ============================================

    /// Remove one record; unknown ids are a no-op
    pub fn delete(&mut self, id: &str) -> Option<R> {
        let idx = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(idx);
        self.selection.remove(id);
        self.clamp();
        debug!("Deleted record {} from {}", id, self.config.title);
        Some(removed)
    }

    /// Remove every selected record and clear the selection
    ///
    /// Returns the number of records removed; a second call removes none.
    pub fn bulk_delete(&mut self) -> usize {
        let before = self.records.len();
        let selection = &self.selection;
        self.records.retain(|r| !selection.is_selected(r.id()));
        self.selection.clear();
        self.clamp();

        let removed = before - self.records.len();
        debug!("Bulk deleted {} records from {}", removed, self.config.title);
        removed
    }

    /// Move `source_id` to the position of `target_id` in the master list
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        let changed = reorder::reorder(&mut self.records, source_id, target_id);
        if changed {
            debug!("Moved {} before {} in {}", source_id, target_id, self.config.title);
        }
        changed
    }

    /// Move the cursor row above its visible predecessor
    pub fn move_cursor_up(&mut self) -> bool {
        let Some((current, neighbour)) = self.cursor_neighbour(-1) else {
            return false;
        };
        let changed = self.reorder(&current, &neighbour);
        self.focus(&current);
        changed
    }

    /// Move the cursor row below its visible successor
    pub fn move_cursor_down(&mut self) -> bool {
        let Some((current, neighbour)) = self.cursor_neighbour(1) else {
            return false;
        };
        let changed = self.reorder(&neighbour, &current);
        self.focus(&current);
        changed
    }

    /// Ids of the cursor row and the visible row `offset` away from it
    fn cursor_neighbour(&self, offset: isize) -> Option<(String, String)> {
        let visible = self.visible();
        let pos = self.view.page_index * self.view.page_size + self.cursor;
        let current = visible.get(pos)?;
        let neighbour = visible.get(pos.checked_add_signed(offset)?)?;
        Some((current.id().to_string(), neighbour.id().to_string()))
    }

    // ============================================
    // DERIVED OUTPUTS
    // ============================================

    pub fn export(&self, scope: ExportScope) -> ExportArtifact {
        let columns = &self.config.export_columns;
        match scope {
            ExportScope::Full => build_artifact(&self.config.export_file, &self.records, columns),
            ExportScope::View => build_artifact(&self.config.export_file, self.visible(), columns),
        }
    }

    /// Summary cards over the whole master list
    pub fn summary(&self) -> Vec<SummaryCard> {
        R::summarize(&self.records)
    }

    /// (label, metric) pairs for the page's bar chart
    ///
    /// `CurrentPage` follows the table; `TopOfView(n)` ranks the filtered
    /// view by metric, highest first, and keeps the first `n`.
    pub fn chart_points(&self) -> Vec<(String, u64)> {
        let rows = match self.config.chart {
            ChartSource::CurrentPage => self.page(),
            ChartSource::TopOfView(count) => {
                let mut rows: Vec<&R> = self.filtered().collect();
                sort_view(&mut rows, SortMode::Metric, false);
                rows.truncate(count);
                rows
            }
        };

        rows.into_iter()
            .map(|r| {
                let value = r.metric().unwrap_or(0.0).max(0.0).round() as u64;
                (r.search_text().to_string(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::columns::{Column, ColumnFormat};
    use crate::model::record::FieldValue;

    #[derive(Debug, Clone)]
    struct Item {
        id: String,
        name: String,
        group: String,
        value: i64,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
        fn search_text(&self) -> &str {
            &self.name
        }
        fn facet(&self) -> Option<&str> {
            Some(&self.group)
        }
        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(self.name.as_str().into()),
                "value" => Some(self.value.into()),
                _ => None,
            }
        }
        fn metric(&self) -> Option<f64> {
            Some(self.value as f64)
        }
    }

    fn controller(count: usize, page_size: usize) -> TableController<Item> {
        let config = TableConfig::builder("Items")
            .column(Column::new("name", "Name", ColumnFormat::Text))
            .column(Column::new("value", "Value", ColumnFormat::Integer))
            .facet("Group", &["odd", "even"])
            .page_size(page_size)
            .build();
        let items = (1..=count)
            .map(|i| Item {
                id: format!("i{}", i),
                name: format!("Item {}", i),
                group: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                value: i as i64 * 10,
            })
            .collect();
        TableController::new(config, items)
    }

    fn page_ids(c: &TableController<Item>) -> Vec<String> {
        c.page().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut c = controller(25, 10);
        assert!(c.next_page());
        assert_eq!(c.view().page_index, 1);
        c.set_query("item 1");
        assert_eq!(c.view().page_index, 0);
    }

    #[test]
    fn test_cycle_facet_filters_and_resets_page() {
        let mut c = controller(25, 10);
        c.next_page();
        c.cycle_facet();
        assert_eq!(c.view().facet, Facet::parse("odd"));
        assert_eq!(c.view().page_index, 0);
        assert_eq!(c.filtered_len(), 13);
    }

    #[test]
    fn test_cursor_down_flips_page_at_bottom() {
        let mut c = controller(12, 5);
        for _ in 0..5 {
            c.cursor_down();
        }
        assert_eq!(c.view().page_index, 1);
        assert_eq!(c.cursor(), 0);
        c.cursor_up();
        assert_eq!(c.view().page_index, 0);
        assert_eq!(c.cursor(), 4);
    }

    #[test]
    fn test_cursor_last_and_first() {
        let mut c = controller(12, 5);
        c.cursor_last();
        assert_eq!(c.view().page_index, 2);
        assert_eq!(c.cursor_record().map(|r| r.id.as_str()), Some("i12"));
        c.cursor_first();
        assert_eq!(c.cursor_record().map(|r| r.id.as_str()), Some("i1"));
    }

    #[test]
    fn test_delete_clamps_page_and_cursor() {
        let mut c = controller(11, 5);
        c.cursor_last();
        assert_eq!(c.view().page_index, 2);
        assert!(c.delete("i11").is_some());
        assert_eq!(c.view().page_index, 1);
        assert!(c.cursor() < 5);
        assert!(c.delete("missing").is_none());
    }

    #[test]
    fn test_delete_purges_selection_entry() {
        let mut c = controller(3, 10);
        c.toggle_selected("i2");
        c.delete("i2");
        assert!(!c.selection().contains("i2"));
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn test_toggle_all_covers_every_page_of_filtered_view() {
        let mut c = controller(25, 10);
        c.set_facet(Facet::parse("even"));
        assert!(c.toggle_all_in_view());
        assert_eq!(c.selected_count(), 12);
        assert!(!c.selection().is_selected("i1"));
        assert!(!c.toggle_all_in_view());
        assert_eq!(c.selected_count(), 0);
    }

    #[test]
    fn test_toggle_selected_ignores_unknown_ids() {
        let mut c = controller(3, 10);
        c.toggle_selected("nope");
        assert!(c.selection().is_empty());
    }

    #[test]
    fn test_move_cursor_up_and_down() {
        let mut c = controller(4, 10);
        c.cursor_down(); // on i2
        assert!(c.move_cursor_up());
        assert_eq!(page_ids(&c), vec!["i2", "i1", "i3", "i4"]);
        assert_eq!(c.cursor(), 0);

        assert!(c.move_cursor_down());
        assert_eq!(page_ids(&c), vec!["i1", "i2", "i3", "i4"]);
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_move_at_edges_is_noop() {
        let mut c = controller(3, 10);
        assert!(!c.move_cursor_up());
        c.cursor_last();
        assert!(!c.move_cursor_down());
    }

    #[test]
    fn test_move_under_filter_uses_master_positions() {
        let mut c = controller(6, 10);
        c.set_facet(Facet::parse("even"));
        // visible: i2, i4, i6; put cursor on i4
        c.cursor_down();
        assert!(c.move_cursor_up());
        let master: Vec<&str> = c.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(master, vec!["i1", "i4", "i2", "i3", "i5", "i6"]);
    }

    #[test]
    fn test_cycle_page_size_keeps_first_row() {
        let mut c = controller(60, 10);
        c.next_page();
        c.next_page();
        c.cycle_page_size(); // 10 -> 20, first row 20 stays visible
        assert_eq!(c.view().page_size, 20);
        assert_eq!(c.view().page_index, 1);
    }

    #[test]
    fn test_metric_sort_and_chart_points() {
        let mut c = controller(3, 10);
        c.set_sort(SortMode::Metric, false);
        assert_eq!(page_ids(&c), vec!["i3", "i2", "i1"]);
        assert_eq!(
            c.chart_points(),
            vec![
                ("Item 3".to_string(), 30),
                ("Item 2".to_string(), 20),
                ("Item 1".to_string(), 10)
            ]
        );
    }

    #[test]
    fn test_ranked_chart_ignores_sort_and_pages() {
        let config = TableConfig::builder("Items")
            .facet("Group", &["odd", "even"])
            .page_size(2)
            .chart_top(2, "Items")
            .build();
        let mut c = TableController::new(config, controller(7, 2).records().to_vec());
        c.set_sort(SortMode::Name, false);
        c.cycle_facet(); // odd: i1, i3, i5, i7
        assert_eq!(page_ids(&c), vec!["i1", "i3"]);
        assert_eq!(
            c.chart_points(),
            vec![("Item 7".to_string(), 70), ("Item 5".to_string(), 50)]
        );

        c.set_query("item 1");
        assert_eq!(c.chart_points(), vec![("Item 1".to_string(), 10)]);
    }

    #[test]
    fn test_export_scopes() {
        let mut c = controller(3, 10);
        c.set_sort(SortMode::Metric, false);
        c.set_query("item 2");
        assert_eq!(
            c.export(ExportScope::Full).body,
            "Name,Value\nItem 1,10\nItem 2,20\nItem 3,30"
        );
        let view = c.export(ExportScope::View);
        assert_eq!(view.body, "Name,Value\nItem 2,20");
        assert_eq!(view.row_count, 1);
        assert_eq!(view.file_name, "items.csv");
    }
}
