//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box above legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Rows of the page matching query and facet
/// - `facet`: Facet label and current value, when the page has one
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    facet: Option<(&str, &str)>,
) {
    let title = if active {
        format!(" Search ({} matches) - Enter to keep, Esc to cancel ", match_count)
    } else {
        // Search accepted - show match count
        format!(" Search ({} matches) - Esc to clear ", match_count)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut spans = if active {
        vec![
            Span::raw("Name: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ]
    } else {
        vec![Span::styled(
            format!("Name: {}", query),
            Style::default().fg(Color::Gray),
        )]
    };

    // The facet narrows the same match count, so show it alongside
    if let Some((label, value)) = facet {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{}: {}", label, value),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let input_line = Line::from(spans);

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
