//! Row reordering orchestration
//!
//! Two ways to move a row, both ending in the controller's single reorder
//! operation:
//! - Drag: `m` picks the cursor row up, the cursor moves, `m`/Enter drops
//!   it before the row under the cursor
//! - Step: `K`/`J` swap the row with its visible neighbour
//!
//! Only offered in manual order; in sorted modes the move would not show.

use dashtui::model::Interaction;
use dashtui::SortMode;

use crate::App;

impl App {
    fn can_reorder(&mut self) -> bool {
        if self.model.active_page().sort_mode() == SortMode::Manual {
            return true;
        }
        self.model
            .show_toast("Switch to manual order (s) to move rows".to_string());
        false
    }

    pub(crate) fn start_drag(&mut self) {
        if !self.can_reorder() {
            return;
        }
        if let Some(row) = self.model.active_page().cursor_row() {
            self.model.ui.interaction = Interaction::Dragging {
                source_id: row.id,
                label: row.label,
            };
        }
    }

    /// Drop the dragged row before the cursor row
    pub(crate) fn drop_drag(&mut self) {
        let Interaction::Dragging { source_id, label } = self.model.ui.interaction.clone() else {
            return;
        };
        self.model.ui.interaction = Interaction::Idle;
        let Some(target) = self.model.active_page().cursor_row() else {
            return;
        };

        let page = self.model.active_page_mut();
        if page.reorder(&source_id, &target.id) {
            page.focus(&source_id);
            self.model
                .show_toast(format!("Moved {} before {}", label, target.label));
        }
    }

    pub(crate) fn cancel_drag(&mut self) {
        if self.model.ui.is_dragging() {
            self.model.ui.interaction = Interaction::Idle;
        }
    }

    pub(crate) fn move_row_up(&mut self) {
        if self.can_reorder() {
            self.model.active_page_mut().move_cursor_up();
        }
    }

    pub(crate) fn move_row_down(&mut self) {
        if self.can_reorder() {
            self.model.active_page_mut().move_cursor_down();
        }
    }
}
