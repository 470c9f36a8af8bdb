use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dashtui::model::record::SummaryCard;

/// Card value as shown, with the currency symbol for money cards
fn card_value(card: &SummaryCard, currency_symbol: &str) -> String {
    if card.is_money {
        format!("{}{}", currency_symbol, card.value)
    } else {
        card.value.clone()
    }
}

/// Render the row of summary cards above the table
pub fn render_summary(f: &mut Frame, area: Rect, cards: &[SummaryCard], currency_symbol: &str) {
    if cards.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Fill(1)))
        .split(area);

    for (card, area) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card_value(card, currency_symbol),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.caption.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(card.title.clone())
                .border_style(Style::default().fg(Color::Gray)),
        );
        f.render_widget(widget, *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_cards_get_currency_symbol() {
        let revenue = SummaryCard::money("Total Revenue", "30,500", "Year to date");
        let orders = SummaryCard::new("Total Orders", "1,902", "All months");
        assert_eq!(card_value(&revenue, "₹"), "₹30,500");
        assert_eq!(card_value(&orders, "₹"), "1,902");
    }
}
