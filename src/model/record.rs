//! Record abstraction
//!
//! Every table row implements [`Record`]. The dataset pipeline only ever
//! talks to rows through this trait, so one controller serves every page.

use std::fmt;

/// A projected field value, as shown in a table cell or written to an export
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl FieldValue {
    /// Numeric view of the value (None for text)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Decimal(n) => Some(*n),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Decimal(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

/// A headline number shown above a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    /// Renderer prefixes the configured currency symbol
    pub is_money: bool,
}

impl SummaryCard {
    pub fn new(title: &str, value: impl Into<String>, caption: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            caption: caption.to_string(),
            is_money: false,
        }
    }

    pub fn money(title: &str, value: impl Into<String>, caption: &str) -> Self {
        Self {
            is_money: true,
            ..Self::new(title, value, caption)
        }
    }
}

/// A row in a dataset
///
/// `id` must be unique within a dataset and is never reused after a delete.
pub trait Record: Clone + fmt::Debug {
    /// Stable unique identifier
    fn id(&self) -> &str;

    /// Text the free-text query is matched against (case-insensitive substring)
    fn search_text(&self) -> &str;

    /// Categorical facet value, None when the entity has no facet
    fn facet(&self) -> Option<&str> {
        None
    }

    /// Value for a column key, None for unknown keys
    fn field(&self, key: &str) -> Option<FieldValue>;

    /// Primary numeric metric (revenue, sales) used for ranking and charts
    fn metric(&self) -> Option<f64> {
        None
    }

    /// Summary cards computed over a whole dataset
    fn summarize(_records: &[Self]) -> Vec<SummaryCard> {
        Vec::new()
    }
}
