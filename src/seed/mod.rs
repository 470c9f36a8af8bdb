//! Seed data loading
//!
//! Each page's master list is filled once at start-up from a mock
//! generator, a JSON file, or an HTTP endpoint returning a JSON array.
//! A source that fails falls back to mock data; the error is kept so the
//! front end can toast it.

pub mod mock;

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{DashboardError, Result};
use crate::model::entities::{Customer, MonthlyReport, Product, Seller};
use crate::model::record::Record;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a page's records come from
///
/// Written in config as `mock`, `file:<path>`, `url:<http url>`, or a
/// bare `http(s)://` URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SeedSource {
    #[default]
    Mock,
    File(PathBuf),
    Url(String),
}

impl FromStr for SeedSource {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("mock") || value.is_empty() {
            return Ok(SeedSource::Mock);
        }
        if let Some(path) = value.strip_prefix("file:") {
            return Ok(SeedSource::File(PathBuf::from(path.trim())));
        }
        if let Some(url) = value.strip_prefix("url:") {
            return Ok(SeedSource::Url(url.trim().to_string()));
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return Ok(SeedSource::Url(value.to_string()));
        }
        Err(format!(
            "unknown seed source `{}` (expected mock, file:<path> or url:<url>)",
            value
        ))
    }
}

impl TryFrom<String> for SeedSource {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Mock => write!(f, "mock"),
            SeedSource::File(path) => write!(f, "file:{}", path.display()),
            SeedSource::Url(url) => write!(f, "url:{}", url),
        }
    }
}

/// Per-page seed sources
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SeedSources {
    pub sellers: SeedSource,
    pub customers: SeedSource,
    pub products: SeedSource,
    pub reports: SeedSource,
}

/// Reject datasets where two records share an id
pub fn ensure_unique_ids<R: Record>(records: &[R]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DashboardError::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}

/// Parse a JSON array of records and check ids
pub fn parse_records<R: Record + DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    let records: Vec<R> = serde_json::from_str(json)?;
    ensure_unique_ids(&records)?;
    Ok(records)
}

#[derive(Clone)]
pub struct SeedClient {
    client: Client,
}

impl SeedClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// GET a JSON array of records
    pub async fn fetch<R: Record + DeserializeOwned>(&self, url: &str) -> Result<Vec<R>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        parse_records(&body)
    }
}

/// Load one page's records from a non-mock source
///
/// `Mock` yields `Ok(None)` so the caller picks the generator.
pub async fn load_records<R: Record + DeserializeOwned>(
    source: &SeedSource,
    client: &SeedClient,
) -> Result<Option<Vec<R>>> {
    match source {
        SeedSource::Mock => Ok(None),
        SeedSource::File(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| DashboardError::Read {
                    path: path.clone(),
                    source,
                })?;
            parse_records(&json).map(Some)
        }
        SeedSource::Url(url) => client.fetch(url).await.map(Some),
    }
}

/// A seed source that failed and was replaced by mock data
#[derive(Debug)]
pub struct SeedFailure {
    pub page: &'static str,
    pub source: SeedSource,
    pub error: DashboardError,
}

/// Every page's initial records
#[derive(Debug, Clone)]
pub struct SeedData {
    pub sellers: Vec<Seller>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub reports: Vec<MonthlyReport>,
}

impl SeedData {
    /// Mock data for every page
    pub fn mock(mock_seed: Option<u64>) -> Self {
        let mut rng = mock_rng(mock_seed);
        Self {
            sellers: mock::sellers(&mut rng),
            customers: mock::customers(&mut rng),
            products: mock::products(),
            reports: mock::monthly_reports(&mut rng),
        }
    }

    /// Load every page, falling back to mock data per page on failure
    pub async fn load(sources: &SeedSources, mock_seed: Option<u64>) -> (Self, Vec<SeedFailure>) {
        let mut data = Self::mock(mock_seed);
        let mut failures = Vec::new();

        let client = match SeedClient::new() {
            Ok(client) => client,
            Err(error) => {
                warn!("Seed client unavailable, using mock data: {}", error);
                return (data, failures);
            }
        };

        if let Some(records) = load_page("sellers", &sources.sellers, &client, &mut failures).await {
            data.sellers = records;
        }
        if let Some(records) =
            load_page("customers", &sources.customers, &client, &mut failures).await
        {
            data.customers = records;
        }
        if let Some(records) = load_page("products", &sources.products, &client, &mut failures).await
        {
            data.products = records;
        }
        if let Some(records) = load_page("reports", &sources.reports, &client, &mut failures).await {
            data.reports = records;
        }

        (data, failures)
    }
}

async fn load_page<R: Record + DeserializeOwned>(
    page: &'static str,
    source: &SeedSource,
    client: &SeedClient,
    failures: &mut Vec<SeedFailure>,
) -> Option<Vec<R>> {
    match load_records(source, client).await {
        Ok(Some(records)) => {
            info!("Loaded {} {} from {}", records.len(), page, source);
            Some(records)
        }
        Ok(None) => None,
        Err(error) => {
            warn!("Seed {} for {} failed, using mock data: {}", source, page, error);
            failures.push(SeedFailure {
                page,
                source: source.clone(),
                error,
            });
            None
        }
    }
}

fn mock_rng(mock_seed: Option<u64>) -> fastrand::Rng {
    match mock_seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}
