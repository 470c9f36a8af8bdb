//! Shared types for the Model

use super::pages::PageId;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// What the active table is doing with keyboard input
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Search input has focus; keystrokes edit the query
    Filtering,
    /// A row was picked up and will be dropped on the cursor row
    Dragging { source_id: String, label: String },
}

/// Destructive action waiting for y/n
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteRow {
        page: PageId,
        id: String,
        label: String,
    },
    BulkDelete {
        page: PageId,
        count: usize,
    },
}

impl ConfirmAction {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmAction::DeleteRow { label, .. } => format!("Delete \"{}\"?", label),
            ConfirmAction::BulkDelete { count, .. } => {
                format!("Delete {} selected row{}?", count, if *count == 1 { "" } else { "s" })
            }
        }
    }
}
