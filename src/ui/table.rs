//! Data table panel
//!
//! Renders the active page's current slice with a selection checkbox
//! column. Cell text and colour come from the column's [`ColumnFormat`].

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use dashtui::dataset::{ColumnFormat, RowView, TablePage};
use dashtui::logic::formatting::{format_grouped, format_money, stock_level, StockLevel};
use dashtui::model::record::FieldValue;
use dashtui::model::Interaction;

/// Numeric value rounded to a whole number, if the field is numeric
fn whole(value: &FieldValue) -> Option<i64> {
    value.as_f64().map(|n| n.round() as i64)
}

/// Text shown for one cell
pub fn cell_text(value: Option<&FieldValue>, format: ColumnFormat, currency_symbol: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match (format, whole(value)) {
        (ColumnFormat::Money, Some(n)) => format_money(currency_symbol, n),
        (ColumnFormat::Integer, Some(n)) => format_grouped(n),
        (ColumnFormat::Percent, Some(n)) => format!("{}%", n),
        (ColumnFormat::Stock, Some(n)) => match stock_level(n) {
            StockLevel::Out => "Out of stock".to_string(),
            _ => n.to_string(),
        },
        (ColumnFormat::Rating, _) => match value.as_f64() {
            Some(r) => format!("★ {:.1}", r),
            None => value.to_string(),
        },
        _ => value.to_string(),
    }
}

/// Colour for one cell (stock bands and status badges)
pub fn cell_style(value: Option<&FieldValue>, format: ColumnFormat) -> Style {
    let Some(value) = value else {
        return Style::default();
    };

    match format {
        ColumnFormat::Stock => match whole(value).map(stock_level) {
            Some(StockLevel::InStock) => Style::default().fg(Color::Green),
            Some(StockLevel::Low) => Style::default().fg(Color::Yellow),
            Some(StockLevel::Out) => Style::default().fg(Color::Red),
            None => Style::default(),
        },
        ColumnFormat::Badge => {
            let color = match value.to_string().as_str() {
                "Active" => Color::Green,
                "Pending" => Color::Yellow,
                "Suspended" | "Inactive" => Color::Red,
                _ => Color::Cyan,
            };
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        }
        ColumnFormat::Rating => Style::default().fg(Color::Yellow),
        _ => Style::default(),
    }
}

fn build_row<'a>(
    row: &RowView,
    page: &dyn TablePage,
    currency_symbol: &str,
    dragging_id: Option<&str>,
) -> Row<'a> {
    let checkbox = if row.selected { "[x]" } else { "[ ]" };
    let mut cells = vec![Cell::from(Span::styled(
        checkbox,
        Style::default().fg(Color::Cyan),
    ))];

    for (column, value) in page.config().columns.iter().zip(row.cells.iter()) {
        let value = value.as_ref();
        cells.push(Cell::from(Span::styled(
            cell_text(value, column.format, currency_symbol),
            cell_style(value, column.format),
        )));
    }

    let mut style = Style::default();
    if row.selected {
        style = style.bg(Color::Rgb(30, 40, 60));
    }
    if dragging_id == Some(row.id.as_str()) {
        style = style.fg(Color::Magenta).add_modifier(Modifier::ITALIC);
    }

    Row::new(cells).style(style)
}

/// Render the table for the active page
pub fn render_table(
    f: &mut Frame,
    area: Rect,
    page: &dyn TablePage,
    interaction: &Interaction,
    currency_symbol: &str,
) {
    let config = page.config();
    let mut title = format!(
        " {} ({} of {}) ",
        config.title,
        page.filtered_len(),
        page.total_len()
    );
    let dragging_id = match interaction {
        Interaction::Dragging { source_id, label } => {
            title.push_str(&format!("- moving {} (m to drop, Esc to cancel) ", label));
            Some(source_id.as_str())
        }
        _ => None,
    };

    let border_color = if dragging_id.is_some() {
        Color::Magenta
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let rows = page.page_rows();
    if rows.is_empty() {
        let empty = Paragraph::new("No records match the current filters")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from("")).chain(
            config
                .columns
                .iter()
                .map(|c| Cell::from(c.label.clone())),
        ),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(3))
        .chain(config.columns.iter().map(|c| Constraint::Fill(c.weight)))
        .collect();

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| build_row(row, page, currency_symbol, dragging_id))
        .collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = TableState::default();
    state.select(Some(page.cursor()));
    f.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_and_integer_cells() {
        let revenue = FieldValue::Integer(30_500);
        assert_eq!(cell_text(Some(&revenue), ColumnFormat::Money, "₹"), "₹30,500");
        assert_eq!(cell_text(Some(&revenue), ColumnFormat::Integer, "₹"), "30,500");
        assert_eq!(cell_text(Some(&FieldValue::Integer(27)), ColumnFormat::Percent, "₹"), "27%");
    }

    #[test]
    fn test_missing_value_is_blank() {
        assert_eq!(cell_text(None, ColumnFormat::Money, "₹"), "");
        assert_eq!(cell_style(None, ColumnFormat::Badge), Style::default());
    }

    #[test]
    fn test_stock_cells() {
        let out = FieldValue::Integer(0);
        let low = FieldValue::Integer(4);
        assert_eq!(cell_text(Some(&out), ColumnFormat::Stock, "$"), "Out of stock");
        assert_eq!(cell_text(Some(&low), ColumnFormat::Stock, "$"), "4");
        assert_eq!(cell_style(Some(&out), ColumnFormat::Stock).fg, Some(Color::Red));
        assert_eq!(cell_style(Some(&low), ColumnFormat::Stock).fg, Some(Color::Yellow));
    }

    #[test]
    fn test_rating_and_badges() {
        let rating = FieldValue::Decimal(4.0);
        assert_eq!(cell_text(Some(&rating), ColumnFormat::Rating, "$"), "★ 4.0");

        let active = FieldValue::from("Active");
        let suspended = FieldValue::from("Suspended");
        assert_eq!(cell_text(Some(&active), ColumnFormat::Badge, "$"), "Active");
        assert_eq!(cell_style(Some(&active), ColumnFormat::Badge).fg, Some(Color::Green));
        assert_eq!(cell_style(Some(&suspended), ColumnFormat::Badge).fg, Some(Color::Red));
    }

    #[test]
    fn test_text_money_falls_back_to_raw() {
        let text = FieldValue::from("n/a");
        assert_eq!(cell_text(Some(&text), ColumnFormat::Money, "₹"), "n/a");
    }
}
