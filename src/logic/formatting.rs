//! Formatting and display logic
//!
//! Pure functions for formatting table values for human-readable display.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format an integer with thousands separators
///
/// # Examples
/// ```
/// use dashtui::logic::formatting::format_grouped;
///
/// assert_eq!(format_grouped(0), "0");
/// assert_eq!(format_grouped(999), "999");
/// assert_eq!(format_grouped(1000), "1,000");
/// assert_eq!(format_grouped(1234567), "1,234,567");
/// assert_eq!(format_grouped(-4200), "-4,200");
/// ```
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount with a currency symbol and thousands separators
pub fn format_money(symbol: &str, value: i64) -> String {
    format!("{}{}", symbol, format_grouped(value))
}

/// Stock availability band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    InStock,
    Low,
    Out,
}

/// More than 10 units is in stock, 1-10 is low, 0 is out
pub fn stock_level(stock: i64) -> StockLevel {
    if stock > 10 {
        StockLevel::InStock
    } else if stock > 0 {
        StockLevel::Low
    } else {
        StockLevel::Out
    }
}

/// Truncate text to a display width, appending an ellipsis when cut
///
/// Width is measured in terminal columns, so wide characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
