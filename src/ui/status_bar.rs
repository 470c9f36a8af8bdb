use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dashtui::dataset::TablePage;
use dashtui::SortMode;

/// Build the status text: row range, page, sort, filter and selection
///
/// Parts are separated by " | "; the renderer colours each label.
pub fn build_status_line(page: &dyn TablePage) -> String {
    let view = page.view();
    let filtered = page.filtered_len();
    let mut metrics = Vec::new();

    // "Showing 11-20 of 37"
    let range = if filtered == 0 {
        "Showing: 0 of 0".to_string()
    } else {
        let start = view.page_index * view.page_size + 1;
        let end = (start + view.page_size - 1).min(filtered);
        format!("Showing: {}-{} of {}", start, end, filtered)
    };
    metrics.push(range);

    metrics.push(format!(
        "Page: {}/{}",
        view.page_index + 1,
        page.page_count()
    ));
    metrics.push(format!("Rows: {}", view.page_size));
    if view.is_filtered() {
        metrics.push(format!("Matches: {}/{}", filtered, page.total_len()));
    }

    let sort_mode = page.sort_mode();
    let sort_display = if sort_mode == SortMode::Manual {
        format!("Sort: {}", sort_mode.as_str())
    } else {
        format!(
            "Sort: {}{}",
            sort_mode.as_str(),
            if page.sort_reverse() { "↓" } else { "↑" }
        )
    };
    metrics.push(sort_display);

    if let Some(label) = &page.config().facet_label {
        metrics.push(format!("{}: {}", label, view.facet.label()));
    }
    if !view.query.is_empty() {
        metrics.push(format!("Search: {}", view.query));
    }

    let selected = page.selected_count();
    if selected > 0 {
        metrics.push(format!("Selected: {}", selected));
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, page: &dyn TablePage) {
    let status_line = build_status_line(page);

    // Colour the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            let label_color = if label.starts_with("Selected") {
                Color::Cyan
            } else {
                Color::Yellow
            };
            spans.push(Span::styled(label.to_string(), Style::default().fg(label_color)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashtui::dataset::TableController;
    use dashtui::model::entities::Seller;
    use dashtui::model::pages::sellers_table;
    use dashtui::seed::mock;

    fn sellers() -> TableController<Seller> {
        let mut rng = fastrand::Rng::with_seed(7);
        TableController::new(sellers_table(), mock::sellers(&mut rng))
    }

    #[test]
    fn test_status_line_first_page() {
        let page = sellers();
        let line = build_status_line(&page);
        assert_eq!(
            line,
            "Showing: 1-10 of 20 | Page: 1/2 | Rows: 10 | Sort: Manual | Status: all"
        );
    }

    #[test]
    fn test_status_line_last_partial_page_and_selection() {
        let mut page = sellers();
        page.set_query("e");
        let filtered = TablePage::filtered_len(&page);
        page.cursor_last();
        page.toggle_cursor_selected();
        page.cycle_sort();
        let line = build_status_line(&page);

        assert!(line.contains(&format!("of {}", filtered)));
        assert!(line.contains(&format!("Matches: {}/20", filtered)));
        assert!(line.contains("Sort: A-Z↑"));
        assert!(line.contains("Search: e"));
        assert!(line.ends_with("Selected: 1"));
    }

    #[test]
    fn test_status_line_empty_view() {
        let mut page = sellers();
        page.set_query("no such seller");
        let line = build_status_line(&page);
        assert!(line.starts_with("Showing: 0 of 0 | Page: 1/1"));
        assert!(line.contains("Matches: 0/20"));
    }
}
