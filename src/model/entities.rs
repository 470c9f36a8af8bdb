//! Dashboard entities
//!
//! One struct per admin page. Field names follow the JSON the dashboard's
//! seed endpoints emit (camelCase), so seed files deserialize directly.

use serde::{Deserialize, Deserializer};

use super::record::{FieldValue, Record, SummaryCard};
use crate::logic::formatting::format_grouped;
use crate::logic::summary;

/// Accept a JSON number or a numeric string ("4.3")
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn percent_of(part: usize, whole: usize) -> usize {
    if whole == 0 {
        0
    } else {
        part * 100 / whole
    }
}

// ============================================
// SELLERS
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sales: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub region: String,
}

impl Record for Seller {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn facet(&self) -> Option<&str> {
        non_empty(&self.status)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.as_str().into(),
            "image" => self.image.as_str().into(),
            "sales" => self.sales.into(),
            "rating" => self.rating.into(),
            "status" => self.status.as_str().into(),
            "region" => self.region.as_str().into(),
            _ => return None,
        })
    }

    fn metric(&self) -> Option<f64> {
        Some(self.sales as f64)
    }

    fn summarize(records: &[Self]) -> Vec<SummaryCard> {
        let total = records.len();
        let active = summary::count_where(records, |s| s.status == "Active");
        let top_rated = summary::count_where(records, |s| s.rating >= 4.5);
        let inactive = summary::count_where(records, |s| s.status == "Suspended");

        vec![
            SummaryCard::new("Total Sellers", total.to_string(), "All registered sellers"),
            SummaryCard::new(
                "Active Sellers",
                active.to_string(),
                &format!("{}% of all sellers", percent_of(active, total)),
            ),
            SummaryCard::new("Top Rated", top_rated.to_string(), "Rating 4.5 and above"),
            SummaryCard::new("Inactive Sellers", inactive.to_string(), "Need follow-up"),
        ]
    }
}

// ============================================
// CUSTOMERS
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn facet(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "region" => self.region.as_str().into(),
            "orders" => self.orders.into(),
            "revenue" => self.revenue.into(),
            "status" => self.status.as_str().into(),
            "image" => self.image.as_str().into(),
            _ => return None,
        })
    }

    fn metric(&self) -> Option<f64> {
        Some(self.revenue as f64)
    }

    fn summarize(records: &[Self]) -> Vec<SummaryCard> {
        let total_revenue = summary::sum_by(records, |c| c.revenue as i64);
        let avg_order_value = if records.is_empty() {
            0
        } else {
            total_revenue / records.len() as i64
        };
        let top_region =
            summary::top_group_by(records, |c| c.region.as_str(), |c| c.revenue as i64)
                .unwrap_or("-")
                .to_string();

        vec![
            SummaryCard::new("Total Customers", records.len().to_string(), "All customers"),
            SummaryCard::money("Total Revenue", format_grouped(total_revenue), "Across all customers"),
            SummaryCard::money("Average Order Value", format_grouped(avg_order_value), "Revenue per customer"),
            SummaryCard::new("Top Region", top_region, "Most revenue"),
        ]
    }
}

// ============================================
// PRODUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: u64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub sales: u32,
    #[serde(default)]
    pub image: String,
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.name
    }

    fn facet(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "price" => self.price.into(),
            "stock" => self.stock.into(),
            "sales" => self.sales.into(),
            "image" => self.image.as_str().into(),
            _ => return None,
        })
    }

    fn metric(&self) -> Option<f64> {
        Some(f64::from(self.sales))
    }

    fn summarize(records: &[Self]) -> Vec<SummaryCard> {
        let total_stock = summary::sum_by(records, |p| i64::from(p.stock));
        let total_sales = summary::sum_by(records, |p| i64::from(p.sales));
        let categories = summary::distinct_count(records, |p| p.category.as_str());
        let out_of_stock = summary::count_where(records, |p| p.stock == 0);

        vec![
            SummaryCard::new("Total Stock", format_grouped(total_stock), "Units on hand"),
            SummaryCard::new("Total Sales", format_grouped(total_sales), "Units sold"),
            SummaryCard::new("Categories", categories.to_string(), "Distinct categories"),
            SummaryCard::new("Out of Stock", out_of_stock.to_string(), "Need restocking"),
        ]
    }
}

// ============================================
// MONTHLY REPORTS
// ============================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub id: String,
    pub month: String,
    pub total_orders: u32,
    pub total_revenue: u64,
    pub profit_margin: u32,
    #[serde(default)]
    pub top_product: String,
}

impl Record for MonthlyReport {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> &str {
        &self.month
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        Some(match key {
            "id" => self.id.as_str().into(),
            "month" => self.month.as_str().into(),
            "total_orders" => self.total_orders.into(),
            "total_revenue" => self.total_revenue.into(),
            "profit_margin" => self.profit_margin.into(),
            "top_product" => self.top_product.as_str().into(),
            _ => return None,
        })
    }

    fn metric(&self) -> Option<f64> {
        Some(self.total_revenue as f64)
    }

    fn summarize(records: &[Self]) -> Vec<SummaryCard> {
        let total_revenue = summary::sum_by(records, |r| r.total_revenue as i64);
        let total_orders = summary::sum_by(records, |r| i64::from(r.total_orders));
        let avg_profit = summary::average(records, |r| f64::from(r.profit_margin))
            .map(|avg| format!("{:.1}%", avg))
            .unwrap_or_else(|| "-".to_string());

        vec![
            SummaryCard::money("Total Revenue", format_grouped(total_revenue), "Year to date"),
            SummaryCard::new("Avg Profit", avg_profit, "Mean profit margin"),
            SummaryCard::new("Total Orders", format_grouped(total_orders), "All months"),
        ]
    }
}
