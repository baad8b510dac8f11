//! # Catalog Configuration
//!
//! Where the remote product store lives and how the catalog talks to it.
//! Defaults can be overridden from the environment:
//!
//! - `CATALOG_API_URL` - base URL of the product store (no `/api/products`)
//! - `CATALOG_TIMEOUT_SECS` - per-request timeout
//! - `CATALOG_PRESORT_BY_PRICE` - sort the collection by selling price on load

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://frontend-assessment-server.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the product collection on the remote store
pub const PRODUCTS_PATH: &str = "/api/products";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the remote product store
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Order the loaded collection by ascending selling price
    #[serde(default)]
    pub presort_by_price: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            presort_by_price: false,
        }
    }
}

impl CatalogConfig {
    /// Config for a specific store, other settings default
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load config, letting environment variables override defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("CATALOG_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        if let Some(secs) = lookup("CATALOG_TIMEOUT_SECS") {
            config.timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_TIMEOUT_SECS is not a number: {:?}", secs))?;
        }

        if let Some(flag) = lookup("CATALOG_PRESORT_BY_PRICE") {
            config.presort_by_price = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    /// Override the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_presort_by_price(mut self, enabled: bool) -> Self {
        self.presort_by_price = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the product collection
    pub fn products_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PRODUCTS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.presort_by_price);
        assert_eq!(
            config.products_url(),
            "https://frontend-assessment-server.onrender.com/api/products"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = CatalogConfig::new("http://127.0.0.1:3001/");
        assert_eq!(config.products_url(), "http://127.0.0.1:3001/api/products");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("CATALOG_API_URL", "http://localhost:9000"),
            ("CATALOG_TIMEOUT_SECS", "5"),
            ("CATALOG_PRESORT_BY_PRICE", "true"),
        ]);
        let config = CatalogConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.presort_by_price);
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let result = CatalogConfig::from_lookup(|k| {
            (k == "CATALOG_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }
}
