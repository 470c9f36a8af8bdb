//! Admin dashboard TUI library
//!
//! Exposes the tabular dataset pipeline and the pure model for testing

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod logic;
pub mod model;
pub mod seed;

/// Sort mode for table views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Manual, // Master order (drag-reorderable)
    Name,   // Sort by the searchable name column
    Metric, // Sort by the page's primary metric, highest first
}

impl SortMode {
    pub fn as_str(&self) -> &str {
        match self {
            SortMode::Manual => "Manual",
            SortMode::Name => "A-Z",
            SortMode::Metric => "Metric",
        }
    }
}
