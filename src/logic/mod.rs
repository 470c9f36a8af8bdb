//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Seed error classification for toasts
//! - formatting: Money, grouping, stock bands and truncation
//! - navigation: Row cursor movement across pages
//! - pagination: Page slicing and page counts
//! - reorder: Single-element moves on the master list
//! - search: Query and facet filtering
//! - sorting: Sort mode comparisons
//! - summary: Aggregations behind the summary cards
//! - ui: UI state transitions and cycling

pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod pagination;
pub mod reorder;
pub mod search;
pub mod sorting;
pub mod summary;
pub mod ui;
