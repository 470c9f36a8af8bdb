use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar (borders included)
pub const SIDEBAR_WIDTH: u16 = 26;

/// Below this width the sidebar is hidden and the table gets the full width
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 80;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top header bar (app name, page title, route)
    pub header_area: Rect,
    /// Sidebar area (if wide enough)
    pub sidebar_area: Option<Rect>,
    /// Summary cards row
    pub summary_area: Rect,
    /// Data table
    pub table_area: Rect,
    /// Bar chart under the table (if toggled on)
    pub chart_area: Option<Rect>,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    legend_height: u16,
    search_visible: bool,
    show_chart: bool,
) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    // Header (top) + body + search + legend + status bar (bottom)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (top border, text, bottom border)
            Constraint::Min(8),                // Sidebar + page body
            Constraint::Length(search_height), // Search input (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    let body_area = main_chunks[1];
    let (sidebar_area, page_area) = if terminal_size.width >= MIN_WIDTH_FOR_SIDEBAR {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
            .split(body_area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, body_area)
    };

    let chart_height = if show_chart { 12 } else { 0 };
    let page_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),            // Summary cards
            Constraint::Min(5),               // Table
            Constraint::Length(chart_height), // Chart
        ])
        .split(page_area);

    LayoutInfo {
        header_area: main_chunks[0],
        sidebar_area,
        summary_area: page_chunks[0],
        table_area: page_chunks[1],
        chart_area: show_chart.then_some(page_chunks[2]),
        search_area: search_visible.then_some(main_chunks[2]),
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}
