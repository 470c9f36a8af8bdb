use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, Result};
use crate::seed::SeedSources;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vim_mode: bool,
    /// Overrides every page's default page size when set
    pub page_size: Option<usize>,
    pub export_dir: Option<PathBuf>,
    pub timestamp_exports: bool,
    pub currency_symbol: String,
    /// Fixed RNG seed for mock data
    pub mock_seed: Option<u64>,
    pub seeds: SeedSources,
}

/// Largest `page_size` a config may ask for
pub const MAX_PAGE_SIZE: usize = 1000;

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            page_size: None,
            export_dir: None,
            timestamp_exports: false,
            currency_symbol: default_currency_symbol(),
            mock_seed: None,
            seeds: SeedSources::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes as null, which means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(text)?;
        config.page_size = config.page_size.map(|size| size.clamp(1, MAX_PAGE_SIZE));
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Export directory: configured, else Downloads, else home, else cwd
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedSource;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::default().currency_symbol, "₹");
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
vim_mode: true
page_size: 20
export_dir: /tmp/exports
timestamp_exports: true
currency_symbol: "$"
mock_seed: 42
seeds:
  sellers: "url:http://localhost:3000/api/sellers"
  products: "file:data/products.json"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.page_size, Some(20));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
        assert!(config.timestamp_exports);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.mock_seed, Some(42));
        assert_eq!(
            config.seeds.sellers,
            SeedSource::Url("http://localhost:3000/api/sellers".to_string())
        );
        assert_eq!(
            config.seeds.products,
            SeedSource::File(PathBuf::from("data/products.json"))
        );
        assert_eq!(config.seeds.customers, SeedSource::Mock);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_yaml("vim_mode: true\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.seeds, SeedSources::default());
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = Config::from_yaml("page_size: 100000\n").unwrap();
        assert_eq!(config.page_size, Some(MAX_PAGE_SIZE));
        let config = Config::from_yaml("page_size: 0\n").unwrap();
        assert_eq!(config.page_size, Some(1));
    }

    #[test]
    fn test_bad_seed_source_is_config_error() {
        let err = Config::from_yaml("seeds:\n  sellers: \"ftp://x\"\n").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/no/such/dashtui.yaml")).unwrap_err();
        assert!(matches!(err, DashboardError::Read { .. }));
    }
}
