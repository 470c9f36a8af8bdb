use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{BarChart, Block, Borders},
    Frame,
};

use dashtui::logic::formatting::truncate_to_width;

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 12;

/// Widest bar that fits `count` bars (plus gaps) inside the borders
pub fn bar_width(area_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area_width.saturating_sub(2);
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    let per_bar = inner.saturating_sub(BAR_GAP.saturating_mul(count.saturating_sub(1))) / count;
    per_bar.clamp(1, MAX_BAR_WIDTH)
}

/// Render the metric bar chart under `title`
pub fn render_chart(f: &mut Frame, area: Rect, title: &str, points: &[(String, u64)]) {
    let width = bar_width(area.width, points.len());

    let labels: Vec<String> = points
        .iter()
        .map(|(label, _)| truncate_to_width(label, width as usize))
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(points.iter())
        .map(|(label, (_, value))| (label.as_str(), *value))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::Gray)),
        )
        .data(data.as_slice())
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .label_style(Style::default().fg(Color::Gray));

    f.render_widget(chart, area);
}
