//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **PageSet**: One table controller per admin page
//! - **NavigationModel**: Active page and sidebar sections
//! - **UiModel**: Preferences, dialogs, interaction state, toast
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: Export writes and seed fetches live outside the model
//! - Pure accessors: Helper methods are side-effect free

pub mod entities;
pub mod navigation;
pub mod pages;
pub mod record;
pub mod types;
pub mod ui;
pub mod view;

pub use navigation::NavigationModel;
pub use pages::{PageId, PageSet};
pub use types::*;
pub use ui::UiModel;

use crate::config::Config;
use crate::dataset::TablePage;
use crate::seed::SeedData;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Per-page datasets and view state
    pub pages: PageSet,

    /// Active page and sidebar state
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new(data: SeedData, config: &Config, start_page: PageId) -> Self {
        Self {
            pages: PageSet::new(data, config.page_size),
            navigation: NavigationModel::new(start_page),
            ui: UiModel::new(config.vim_mode, &config.currency_symbol),
        }
    }

    pub fn active_page_id(&self) -> PageId {
        self.navigation.active_page
    }

    /// Table of the page currently shown
    pub fn active_page(&self) -> &dyn TablePage {
        self.pages.get(self.navigation.active_page)
    }

    pub fn active_page_mut(&mut self) -> &mut dyn TablePage {
        self.pages.get_mut(self.navigation.active_page)
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
