//! Navigation orchestration methods
//!
//! Page switching, row cursor movement and pagination. Switching page
//! drops any in-progress drag or search input; each page keeps its own
//! view state.

use dashtui::model::PageId;

use crate::App;

impl App {
    pub(crate) fn switch_page(&mut self, page: PageId) {
        if page == self.model.active_page_id() {
            return;
        }
        self.model.close_all_modals();
        self.model.navigation.activate(page);
    }

    pub(crate) fn next_tab(&mut self) {
        self.switch_page(self.model.active_page_id().next());
    }

    pub(crate) fn previous_tab(&mut self) {
        self.switch_page(self.model.active_page_id().prev());
    }

    pub(crate) fn next_item(&mut self) {
        self.model.active_page_mut().cursor_down();
    }

    pub(crate) fn previous_item(&mut self) {
        self.model.active_page_mut().cursor_up();
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.model.active_page_mut().cursor_first();
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.model.active_page_mut().cursor_last();
    }

    pub(crate) fn next_table_page(&mut self) {
        self.model.active_page_mut().next_page();
    }

    pub(crate) fn previous_table_page(&mut self) {
        self.model.active_page_mut().prev_page();
    }

    pub(crate) fn cycle_page_size(&mut self) {
        let page = self.model.active_page_mut();
        page.cycle_page_size();
        let size = page.view().page_size;
        self.model.show_toast(format!("Rows per page: {}", size));
    }

    pub(crate) fn cycle_open_section(&mut self) {
        self.model.navigation.cycle_open_section();
    }

    pub(crate) fn toggle_chart(&mut self) {
        self.model.ui.show_chart = !self.model.ui.show_chart;
    }
}
