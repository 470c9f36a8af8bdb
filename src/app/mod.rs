//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in dashtui::model)
//! - Table controllers (dashtui::dataset)
//! - The export sink
//! - Toast feedback for the user
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod export;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod reorder;
pub(crate) mod selection;
pub(crate) mod sorting;
