//! Sorting orchestration methods
//!
//! Sort mode and direction are per page. Changing either cancels a drag in
//! progress, since dropping only makes sense against manual order.

use crate::App;

impl App {
    pub(crate) fn cycle_sort_mode(&mut self) {
        self.cancel_drag();
        let page = self.model.active_page_mut();
        page.cycle_sort();
        let mode = page.sort_mode().as_str().to_string();
        self.model.show_toast(format!("Sort: {}", mode));
    }

    pub(crate) fn toggle_sort_reverse(&mut self) {
        if self.model.active_page().sort_mode() == dashtui::SortMode::Manual {
            self.model
                .show_toast("Manual order has no direction".to_string());
            return;
        }
        self.model.active_page_mut().toggle_reverse();
    }
}
