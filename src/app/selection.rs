//! Selection and delete orchestration
//!
//! Deletes never run straight from a key press: they set a
//! `ConfirmAction` and run once the user answers `y`.

use dashtui::model::ConfirmAction;
use tracing::info;

use crate::App;

impl App {
    pub(crate) fn toggle_selected(&mut self) {
        self.model.active_page_mut().toggle_cursor_selected();
    }

    /// Select or deselect every row of the filtered view (all pages)
    pub(crate) fn toggle_select_all(&mut self) {
        let page = self.model.active_page_mut();
        let rows = page.filtered_len();
        if rows == 0 {
            self.model.show_toast("No rows in view".to_string());
            return;
        }
        let selected = page.toggle_all_in_view();
        let message = if selected {
            format!("Selected {} rows", rows)
        } else {
            format!("Deselected {} rows", rows)
        };
        self.model.show_toast(message);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.model.active_page_mut().clear_selection();
    }

    pub(crate) fn request_delete(&mut self) {
        let Some(row) = self.model.active_page().cursor_row() else {
            return;
        };
        self.cancel_drag();
        self.model.ui.confirm_action = Some(ConfirmAction::DeleteRow {
            page: self.model.active_page_id(),
            id: row.id,
            label: row.label,
        });
    }

    pub(crate) fn request_bulk_delete(&mut self) {
        let count = self.model.active_page().selected_count();
        if count == 0 {
            self.model.show_toast("No rows selected".to_string());
            return;
        }
        self.cancel_drag();
        self.model.ui.confirm_action = Some(ConfirmAction::BulkDelete {
            page: self.model.active_page_id(),
            count,
        });
    }

    /// Run the pending destructive action (user pressed y)
    pub(crate) fn confirm_pending(&mut self) {
        let Some(action) = self.model.ui.confirm_action.take() else {
            return;
        };

        match action {
            ConfirmAction::DeleteRow { page, id, label } => {
                if self.model.pages.get_mut(page).delete(&id) {
                    info!("Deleted {} ({})", label, id);
                    self.model.show_toast(format!("Deleted {}", label));
                }
            }
            ConfirmAction::BulkDelete { page, .. } => {
                let removed = self.model.pages.get_mut(page).bulk_delete();
                info!("Bulk deleted {} rows from {:?}", removed, page);
                self.model.show_toast(format!("Deleted {} rows", removed));
            }
        }
    }

    pub(crate) fn cancel_pending(&mut self) {
        self.model.ui.confirm_action = None;
    }
}
