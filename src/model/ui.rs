//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, the search/drag interaction and the toast.

use std::time::Instant;

use super::types::{ConfirmAction, Interaction, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Prefix for money cells and cards
    pub currency_symbol: String,

    /// Whether the chart strip is shown
    pub show_chart: bool,

    // ============================================
    // DIALOGS & INTERACTION
    // ============================================
    /// Destructive action waiting for confirmation
    pub confirm_action: Option<ConfirmAction>,

    /// Search input / drag state of the active table
    pub interaction: Interaction,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, currency_symbol: &str) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            currency_symbol: currency_symbol.to_string(),
            show_chart: true,
            confirm_action: None,
            interaction: Interaction::Idle,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_action.is_some() || self.interaction == Interaction::Filtering
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging { .. })
    }

    /// Close dialogs and drop any in-progress interaction
    pub fn close_all_modals(&mut self) {
        self.confirm_action = None;
        self.interaction = Interaction::Idle;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
