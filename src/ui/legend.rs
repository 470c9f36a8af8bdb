use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the legend needs to know about the current screen
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub dragging: bool,
    pub manual_order: bool,
    pub has_facet: bool,
    pub has_selection: bool,
}

fn key(spans: &mut Vec<Span<'static>>, key: &'static str, action: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(action));
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Typing a query: only the search keys apply
    if ctx.search_mode {
        key(&mut hotkey_spans, "Enter", ":Keep Filter  ");
        key(&mut hotkey_spans, "Esc", ":Clear Search  ");
        key(&mut hotkey_spans, "↑/↓", ":Nav");
        return hotkey_spans;
    }

    if ctx.dragging {
        key(&mut hotkey_spans, "↑/↓", ":Choose Target  ");
        key(&mut hotkey_spans, "m/Enter", ":Drop Above Target  ");
        key(&mut hotkey_spans, "Esc", ":Cancel Move");
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if ctx.vim_mode {
        key(&mut hotkey_spans, "hjkl", ":Nav  ");
        key(&mut hotkey_spans, "gg/G", ":First/Last  ");
    } else {
        key(&mut hotkey_spans, "↑/↓", ":Nav  ");
        key(&mut hotkey_spans, "←/→", ":Page  ");
    }
    key(&mut hotkey_spans, "Tab", ":Next Page  ");

    // Search key - contextual based on search state
    if ctx.has_search_query {
        key(&mut hotkey_spans, "Esc", ":Clear Search  ");
    } else {
        key(&mut hotkey_spans, "/", ":Search  ");
    }
    if ctx.has_facet {
        key(&mut hotkey_spans, "f", ":Filter  ");
    }

    key(&mut hotkey_spans, "s", ":Sort  ");
    key(&mut hotkey_spans, "S", ":Reverse  ");
    key(&mut hotkey_spans, "z", ":Rows  ");
    key(&mut hotkey_spans, "Space", ":Select  ");
    key(&mut hotkey_spans, "a", ":Select All  ");
    key(&mut hotkey_spans, "d", ":Delete  ");

    // Bulk delete only makes sense with something selected
    if ctx.has_selection {
        key(&mut hotkey_spans, "D", ":Delete Selected  ");
        key(&mut hotkey_spans, "x", ":Clear Selection  ");
    }

    // Moving rows only in manual order
    if ctx.manual_order {
        // A drop lands above its target, so only J reaches the last row
        key(&mut hotkey_spans, "m", ":Move Above  ");
        key(&mut hotkey_spans, "K/J", ":Move Up/Down (J to last row)  ");
    }

    key(&mut hotkey_spans, "e/E", ":Export All/View  ");
    key(&mut hotkey_spans, "c", ":Chart  ");

    // Quit - always available
    key(&mut hotkey_spans, "q", ":Quit");

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(ctx));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines WITHOUT block borders
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_line = Line::from(build_hotkey_spans(ctx));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Subtract left + right borders
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
