//! Mock data synthesis
//!
//! Used when a page has no seed source, or when its source fails. Products
//! are fully deterministic; the other entities draw their numbers from the
//! given RNG so a fixed `mock_seed` reproduces the same dashboard.

use chrono::Month;

use crate::model::entities::{Customer, MonthlyReport, Product, Seller};

pub const SELLER_STATUSES: [&str; 3] = ["Active", "Pending", "Suspended"];
pub const CUSTOMER_STATUSES: [&str; 3] = ["Active", "Pending", "Inactive"];
pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
pub const CATEGORIES: [&str; 3] = ["Electronics", "Fashion", "Home"];

const SELLER_NAMES: [&str; 20] = [
    "John's Electronics",
    "Sally's Fashion Store",
    "TechWorld",
    "Gadget Hub",
    "FashionFiesta",
    "Home Essentials",
    "Outdoor Outfitters",
    "Book Haven",
    "TechGear",
    "Beauty Bliss",
    "Kitchen Kings",
    "Toy Town",
    "Fitness Freaks",
    "Pet Paradise",
    "Gourmet Goodies",
    "EcoMart",
    "Mobile Mania",
    "Sneaker Spot",
    "Gadget Galaxy",
    "Style Street",
];

const PRODUCT_NAMES: [&str; 12] = [
    "Wireless Headphones",
    "Running Shoes",
    "Smart Watch",
    "Leather Wallet",
    "Table Lamp",
    "Bluetooth Speaker",
    "Sunglasses",
    "Backpack",
    "Gaming Mouse",
    "Coffee Mug",
    "Desk Organizer",
    "Hoodie",
];

/// Lowercase letters and digits only, for mock email local parts
fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn sellers(rng: &mut fastrand::Rng) -> Vec<Seller> {
    SELLER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Seller {
            id: format!("s{:03}", i + 1),
            name: name.to_string(),
            email: format!("contact@{}.com", slug(name)),
            phone: format!("+1-555-{:07}", rng.u32(1_000_000..10_000_000)),
            image: format!("https://i.pravatar.cc/40?img={}", i + 1),
            sales: rng.u64(0..100_000),
            // One decimal, like the seller endpoint's toFixed(1)
            rating: f64::from(rng.u32(0..=50)) / 10.0,
            status: SELLER_STATUSES[i % SELLER_STATUSES.len()].to_string(),
            region: REGIONS[i % REGIONS.len()].to_string(),
        })
        .collect()
}

pub fn customers(rng: &mut fastrand::Rng) -> Vec<Customer> {
    (0..20)
        .map(|i| Customer {
            id: format!("CUST-{}", i + 1),
            name: format!("Customer {}", i + 1),
            email: format!("customer{}@example.com", i + 1),
            region: REGIONS[i % REGIONS.len()].to_string(),
            orders: rng.u32(5..55),
            revenue: rng.u64(5_000..55_000),
            status: CUSTOMER_STATUSES[i % CUSTOMER_STATUSES.len()].to_string(),
            image: format!("https://i.pravatar.cc/150?img={}", i + 10),
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i as u64;
            Product {
                id: format!("p{:03}", i + 1),
                name: name.to_string(),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                price: (n + 1) * 499 + (n % 5) * 150,
                stock: ((i * 7 + 3) % 45) as u32,
                sales: ((i * 37 + 13) % 900) as u32,
                image: format!("https://picsum.photos/seed/prod{}/100/100", i),
            }
        })
        .collect()
}

pub fn monthly_reports(rng: &mut fastrand::Rng) -> Vec<MonthlyReport> {
    let mut month = Month::January;
    let mut reports = Vec::with_capacity(12);

    for i in 0..12u32 {
        reports.push(MonthlyReport {
            id: format!("m{:02}", i + 1),
            month: month.name().to_string(),
            total_orders: 120 + i * 7,
            total_revenue: 30_000 + rng.u64(0..10_000),
            profit_margin: 20 + rng.u32(0..15),
            top_product: PRODUCT_NAMES[(i % 3) as usize].to_string(),
        });
        month = month.succ();
    }

    reports
}
