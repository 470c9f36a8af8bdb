//! Search and facet filter functionality
//!
//! Search edits the active page's query live, one keystroke at a time.
//! Facets cycle through the page's configured values. Both reset the page
//! to its first page (done by the controller).

use dashtui::model::Interaction;
use tracing::debug;

use crate::App;

impl App {
    pub(crate) fn start_search(&mut self) {
        self.cancel_drag();
        self.model.ui.interaction = Interaction::Filtering;
    }

    pub(crate) fn search_push_char(&mut self, c: char) {
        let mut query = self.model.active_page().view().query.clone();
        query.push(c);
        self.model.active_page_mut().set_query(&query);
    }

    pub(crate) fn search_backspace(&mut self) {
        let mut query = self.model.active_page().view().query.clone();
        if query.pop().is_some() {
            self.model.active_page_mut().set_query(&query);
        }
    }

    /// Leave search input, keeping the query applied
    pub(crate) fn accept_search(&mut self) {
        self.model.ui.interaction = Interaction::Idle;
        let page = self.model.active_page();
        debug!(
            "Search '{}' matched {} of {} rows",
            page.view().query,
            page.filtered_len(),
            page.total_len()
        );
    }

    /// Leave search input and drop the query
    pub(crate) fn clear_search(&mut self) {
        self.model.ui.interaction = Interaction::Idle;
        self.model.active_page_mut().set_query("");
    }

    pub(crate) fn cycle_facet(&mut self) {
        let Some(label) = self.model.active_page().config().facet_label.clone() else {
            self.model
                .show_toast("This page has no filter".to_string());
            return;
        };

        self.cancel_drag();
        let page = self.model.active_page_mut();
        page.cycle_facet();
        let facet = page.view().facet.label().to_string();
        self.model.show_toast(format!("{}: {}", label, facet));
    }
}
