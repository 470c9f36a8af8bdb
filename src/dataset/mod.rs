//! Tabular dataset pipeline
//!
//! - columns: Per-page table configuration and builder
//! - controller: Generic store + view pipeline + mutations
//! - page: Object-safe view of a controller for rendering
//! - selection: Id → selected map

pub mod columns;
pub mod controller;
pub mod page;
pub mod selection;

pub use columns::{ChartSource, Column, ColumnFormat, ExportColumn, TableConfig};
pub use controller::TableController;
pub use page::{RowView, TablePage};
pub use selection::SelectionSet;
