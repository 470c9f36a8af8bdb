// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (sidebar, summary, table, chart, bars)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders top bar (page title, route, record count)
// - sidebar: Renders the section/page menu
// - summary: Renders the summary cards
// - table: Renders the data table with selection checkboxes
// - chart: Renders the metric bar chart
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar (range, page, sort, filter)
// - dialogs: Renders delete confirmation dialogs
// - toast: Renders toast notifications (brief pop-up messages)

pub mod chart;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod sidebar;
pub mod status_bar;
pub mod summary;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
