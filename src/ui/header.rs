use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dashtui::model::PageId;

/// Build the header line: app name, page title and route
fn build_header_spans(page: PageId, total_rows: usize) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            "dashtui",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(page.title(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        Span::styled("Route:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", page.route())),
        Span::raw(" | "),
        Span::styled("Records:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", total_rows)),
    ]
}

/// Render the top header bar
pub fn render_header(f: &mut Frame, area: Rect, page: PageId, total_rows: usize) {
    let header = Paragraph::new(Line::from(build_header_spans(page, total_rows)))
        .block(Block::default().borders(Borders::ALL).title("Dashboard"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_title_and_route() {
        let text: String = build_header_spans(PageId::Customers, 20)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.contains("Top Customers"));
        assert!(text.contains("/dashboard/customers/top"));
        assert!(text.ends_with("Records: 20"));
    }
}
