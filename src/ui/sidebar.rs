use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use dashtui::model::navigation::SidebarEntry;

/// One line per section, plus its pages when the section is open
fn build_sidebar_lines(entries: &[SidebarEntry]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in entries {
        let marker = if entry.open { "▾ " } else { "▸ " };
        let section_style = if entry.active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::DarkGray)),
            Span::styled(entry.title, section_style),
        ]));

        if !entry.open {
            continue;
        }
        for item in &entry.items {
            let (bullet, style) = if item.active {
                (
                    "  ● ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ○ ", Style::default().fg(Color::White))
            };
            lines.push(Line::from(vec![
                Span::styled(bullet, Style::default().fg(Color::DarkGray)),
                Span::styled(item.title, style),
            ]));
        }
    }

    lines
}

/// Render the navigation sidebar
pub fn render_sidebar(f: &mut Frame, area: Rect, entries: &[SidebarEntry]) {
    let items: Vec<ListItem> = build_sidebar_lines(entries)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Menu")
            .border_style(Style::default().fg(Color::Gray)),
    );

    f.render_widget(list, area);
}
