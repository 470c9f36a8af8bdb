//! Table configuration
//!
//! A [`TableConfig`] describes one page's table: visible columns, the CSV
//! projection, facet values and defaults. Built once per page with
//! [`TableConfigBuilder`].

use crate::logic::ui::PAGE_SIZES;

/// How a column's value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Text,
    /// Currency symbol plus thousands grouping
    Money,
    /// Thousands grouping
    Integer,
    /// Value followed by "%"
    Percent,
    /// Integer coloured by stock band
    Stock,
    /// One decimal with a star
    Rating,
    /// Coloured status pill
    Badge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub format: ColumnFormat,
    /// Relative width (ratatui `Constraint::Fill`)
    pub weight: u16,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>, format: ColumnFormat) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format,
            weight: 1,
        }
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight.max(1);
        self
    }
}

/// Ordered key → label pair used by CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportColumn {
    pub key: String,
    pub label: String,
}

/// Which rows feed a page's bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartSource {
    /// The rows of the current page, in display order
    #[default]
    CurrentPage,
    /// The highest-metric rows of the filtered view, whatever the sort
    TopOfView(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub title: String,
    pub columns: Vec<Column>,
    pub export_columns: Vec<ExportColumn>,
    /// Facet name shown in the filter chip (None: page has no facet)
    pub facet_label: Option<String>,
    pub facet_values: Vec<String>,
    pub page_size: usize,
    pub export_file: String,
    pub metric_label: String,
    pub chart: ChartSource,
    /// Noun used in ranked chart titles ("Top 5 Customers by Revenue")
    pub row_noun: String,
}

impl TableConfig {
    pub fn chart_title(&self) -> String {
        match self.chart {
            ChartSource::CurrentPage => format!("{} (this page)", self.metric_label),
            ChartSource::TopOfView(count) => {
                format!("Top {} {} by {}", count, self.row_noun, self.metric_label)
            }
        }
    }

    pub fn builder(title: impl Into<String>) -> TableConfigBuilder {
        TableConfigBuilder {
            title: title.into(),
            columns: Vec::new(),
            export_columns: None,
            facet_label: None,
            facet_values: Vec::new(),
            page_size: None,
            export_file: None,
            metric_label: None,
            chart: ChartSource::default(),
            row_noun: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableConfigBuilder {
    title: String,
    columns: Vec<Column>,
    export_columns: Option<Vec<ExportColumn>>,
    facet_label: Option<String>,
    facet_values: Vec<String>,
    page_size: Option<usize>,
    export_file: Option<String>,
    metric_label: Option<String>,
    chart: ChartSource,
    row_noun: Option<String>,
}

impl TableConfigBuilder {
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the CSV projection (defaults to the visible columns)
    pub fn export_columns(mut self, pairs: &[(&str, &str)]) -> Self {
        self.export_columns = Some(
            pairs
                .iter()
                .map(|(key, label)| ExportColumn {
                    key: key.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn facet(mut self, label: impl Into<String>, values: &[&str]) -> Self {
        self.facet_label = Some(label.into());
        self.facet_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size.max(1));
        self
    }

    pub fn export_file(mut self, name: impl Into<String>) -> Self {
        self.export_file = Some(name.into());
        self
    }

    pub fn metric_label(mut self, label: impl Into<String>) -> Self {
        self.metric_label = Some(label.into());
        self
    }

    /// Chart the `count` highest-metric rows of the view instead of the page
    pub fn chart_top(mut self, count: usize, row_noun: impl Into<String>) -> Self {
        self.chart = ChartSource::TopOfView(count.max(1));
        self.row_noun = Some(row_noun.into());
        self
    }

    pub fn build(self) -> TableConfig {
        let export_columns = self.export_columns.unwrap_or_else(|| {
            self.columns
                .iter()
                .map(|c| ExportColumn {
                    key: c.key.clone(),
                    label: c.label.clone(),
                })
                .collect()
        });
        let export_file = self
            .export_file
            .unwrap_or_else(|| format!("{}.csv", self.title.to_lowercase().replace(' ', "_")));

        TableConfig {
            title: self.title,
            columns: self.columns,
            export_columns,
            facet_label: self.facet_label,
            facet_values: self.facet_values,
            page_size: self.page_size.unwrap_or(PAGE_SIZES[0]),
            export_file,
            metric_label: self.metric_label.unwrap_or_else(|| "Value".to_string()),
            chart: self.chart,
            row_noun: self.row_noun.unwrap_or_else(|| "Rows".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TableConfig::builder("Monthly Report")
            .column(Column::new("month", "Month", ColumnFormat::Text))
            .column(Column::new("total_revenue", "Revenue", ColumnFormat::Money))
            .build();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.export_file, "monthly_report.csv");
        assert_eq!(config.metric_label, "Value");
        assert_eq!(config.chart, ChartSource::CurrentPage);
        assert_eq!(config.chart_title(), "Value (this page)");
        assert!(config.facet_label.is_none());
        let keys: Vec<&str> = config.export_columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["month", "total_revenue"]);
    }

    #[test]
    fn test_builder_explicit_projection_and_facet() {
        let config = TableConfig::builder("Sellers")
            .column(Column::new("name", "Name", ColumnFormat::Text).with_weight(3))
            .export_columns(&[("name", "Name"), ("email", "Email")])
            .facet("Status", &["Active", "Pending"])
            .page_size(0)
            .build();

        assert_eq!(config.columns[0].weight, 3);
        assert_eq!(config.export_columns.len(), 2);
        assert_eq!(config.export_columns[1].label, "Email");
        assert_eq!(config.facet_label.as_deref(), Some("Status"));
        assert_eq!(config.facet_values, vec!["Active", "Pending"]);
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_ranked_chart_title() {
        let config = TableConfig::builder("Top Customers")
            .metric_label("Revenue")
            .chart_top(5, "Customers")
            .build();
        assert_eq!(config.chart, ChartSource::TopOfView(5));
        assert_eq!(config.chart_title(), "Top 5 Customers by Revenue");
    }
}
