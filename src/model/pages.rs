//! Dashboard pages
//!
//! One [`TableController`] per admin page, each configured with its own
//! columns, facet, CSV projection and file name.

use crate::dataset::{Column, ColumnFormat, TableConfig, TableController, TablePage};
use crate::seed::mock::{CATEGORIES, REGIONS, SELLER_STATUSES};
use crate::seed::SeedData;

use super::entities::{Customer, MonthlyReport, Product, Seller};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Sellers,
    Customers,
    Products,
    MonthlyReport,
}

impl PageId {
    pub const ALL: [PageId; 4] = [
        PageId::Sellers,
        PageId::Customers,
        PageId::Products,
        PageId::MonthlyReport,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PageId::Sellers => "All Sellers",
            PageId::Customers => "Top Customers",
            PageId::Products => "All Products",
            PageId::MonthlyReport => "Monthly Report",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            PageId::Sellers => "/dashboard/sellers",
            PageId::Customers => "/dashboard/customers/top",
            PageId::Products => "/dashboard/products",
            PageId::MonthlyReport => "/dashboard/reports/monthly",
        }
    }

    /// Parse a `--page` argument
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sellers" => Some(PageId::Sellers),
            "customers" => Some(PageId::Customers),
            "products" => Some(PageId::Products),
            "reports" | "monthly" => Some(PageId::MonthlyReport),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub fn sellers_table() -> TableConfig {
    TableConfig::builder("Sellers")
        .column(Column::new("name", "Name", ColumnFormat::Text).with_weight(3))
        .column(Column::new("email", "Email", ColumnFormat::Text).with_weight(3))
        .column(Column::new("phone", "Phone", ColumnFormat::Text).with_weight(2))
        .column(Column::new("sales", "Sales", ColumnFormat::Money).with_weight(2))
        .column(Column::new("rating", "Rating", ColumnFormat::Rating))
        .column(Column::new("status", "Status", ColumnFormat::Badge))
        .column(Column::new("region", "Region", ColumnFormat::Text))
        .export_columns(&[("name", "Name"), ("email", "Email"), ("phone", "Phone")])
        .facet("Status", &SELLER_STATUSES)
        .export_file("sellers.csv")
        .metric_label("Sales")
        .build()
}

pub fn customers_table() -> TableConfig {
    TableConfig::builder("Top Customers")
        .column(Column::new("name", "Customer", ColumnFormat::Text).with_weight(3))
        .column(Column::new("email", "Email", ColumnFormat::Text).with_weight(3))
        .column(Column::new("region", "Region", ColumnFormat::Text))
        .column(Column::new("orders", "Orders", ColumnFormat::Integer))
        .column(Column::new("revenue", "Revenue", ColumnFormat::Money).with_weight(2))
        .column(Column::new("status", "Status", ColumnFormat::Badge))
        .export_columns(&[
            ("id", "id"),
            ("name", "name"),
            ("email", "email"),
            ("region", "region"),
            ("orders", "orders"),
            ("revenue", "revenue"),
            ("status", "status"),
            ("image", "image"),
        ])
        .facet("Region", &REGIONS)
        .export_file("top-customers.csv")
        .metric_label("Revenue")
        .chart_top(5, "Customers")
        .build()
}

pub fn products_table() -> TableConfig {
    TableConfig::builder("Products")
        .column(Column::new("name", "Product", ColumnFormat::Text).with_weight(3))
        .column(Column::new("category", "Category", ColumnFormat::Badge).with_weight(2))
        .column(Column::new("price", "Price", ColumnFormat::Money))
        .column(Column::new("stock", "Stock", ColumnFormat::Stock))
        .column(Column::new("sales", "Sales", ColumnFormat::Integer))
        .export_columns(&[
            ("id", "ID"),
            ("name", "Name"),
            ("category", "Category"),
            ("price", "Price"),
            ("stock", "Stock"),
            ("sales", "Sales"),
        ])
        .facet("Category", &CATEGORIES)
        .export_file("products.csv")
        .metric_label("Sales")
        .build()
}

pub fn reports_table() -> TableConfig {
    TableConfig::builder("Monthly Report")
        .column(Column::new("month", "Month", ColumnFormat::Text).with_weight(2))
        .column(Column::new("total_orders", "Orders", ColumnFormat::Integer))
        .column(Column::new("total_revenue", "Revenue", ColumnFormat::Money).with_weight(2))
        .column(Column::new("profit_margin", "Profit", ColumnFormat::Percent))
        .column(Column::new("top_product", "Top Product", ColumnFormat::Text).with_weight(3))
        .export_columns(&[
            ("month", "Month"),
            ("total_orders", "Orders"),
            ("total_revenue", "Revenue"),
            ("profit_margin", "Profit Margin"),
            ("top_product", "Top Product"),
        ])
        .page_size(6)
        .export_file("monthly_report.csv")
        .metric_label("Revenue")
        .build()
}

/// Every page's controller
#[derive(Debug, Clone)]
pub struct PageSet {
    pub sellers: TableController<Seller>,
    pub customers: TableController<Customer>,
    pub products: TableController<Product>,
    pub reports: TableController<MonthlyReport>,
}

impl PageSet {
    /// Build pages from seed data; `page_size` overrides every page's default
    pub fn new(data: SeedData, page_size: Option<usize>) -> Self {
        let sized = |mut config: TableConfig| {
            if let Some(size) = page_size {
                config.page_size = size.max(1);
            }
            config
        };

        Self {
            sellers: TableController::new(sized(sellers_table()), data.sellers),
            customers: TableController::new(sized(customers_table()), data.customers),
            products: TableController::new(sized(products_table()), data.products),
            reports: TableController::new(sized(reports_table()), data.reports),
        }
    }

    pub fn get(&self, id: PageId) -> &dyn TablePage {
        match id {
            PageId::Sellers => &self.sellers,
            PageId::Customers => &self.customers,
            PageId::Products => &self.products,
            PageId::MonthlyReport => &self.reports,
        }
    }

    pub fn get_mut(&mut self, id: PageId) -> &mut dyn TablePage {
        match id {
            PageId::Sellers => &mut self.sellers,
            PageId::Customers => &mut self.customers,
            PageId::Products => &mut self.products,
            PageId::MonthlyReport => &mut self.reports,
        }
    }
}
