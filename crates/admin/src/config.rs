//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PIZZERIA_API_URL` - Backend API root; resource paths (`pizzas`,
//!   `orders`, `customers`) are appended to it
//!   (default: `https://perpetual-gentleness-production.up.railway.app/api`)
//! - `PIZZERIA_PAGE_SIZE` - Menu page size for list and reload requests (default: 20)
//! - `PIZZERIA_SELECTION_PAGE_SIZE` - Number of menu items loaded to pick from
//!   when building an order (default: 50)

use thiserror::Error;
use url::Url;

/// Default backend API root.
pub const DEFAULT_API_URL: &str = "https://perpetual-gentleness-production.up.railway.app/api";
const DEFAULT_PAGE_SIZE: &str = "20";
const DEFAULT_SELECTION_PAGE_SIZE: &str = "50";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Backend API root
    pub api_url: Url,
    /// Page size used when listing menu items
    pub page_size: u32,
    /// Number of menu items offered when building an order
    pub selection_page_size: u32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = get_or_default(&lookup, "PIZZERIA_API_URL", DEFAULT_API_URL);
        let api_url = parse_api_url(&api_url)?;
        let page_size = parse_page_size(
            &get_or_default(&lookup, "PIZZERIA_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            "PIZZERIA_PAGE_SIZE",
        )?;
        let selection_page_size = parse_page_size(
            &get_or_default(
                &lookup,
                "PIZZERIA_SELECTION_PAGE_SIZE",
                DEFAULT_SELECTION_PAGE_SIZE,
            ),
            "PIZZERIA_SELECTION_PAGE_SIZE",
        )?;

        Ok(Self {
            api_url,
            page_size,
            selection_page_size,
        })
    }
}

fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar("PIZZERIA_API_URL".to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "PIZZERIA_API_URL".to_string(),
            format!("expected an http(s) URL, got {raw}"),
        ));
    }

    Ok(url)
}

fn parse_page_size(raw: &str, key: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        )),
        Ok(size) => Ok(size),
        Err(e) => Err(ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AdminConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.selection_page_size, 50);
    }

    #[test]
    fn test_overrides() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("PIZZERIA_API_URL", "http://localhost:8080/api"),
            ("PIZZERIA_PAGE_SIZE", "5"),
            ("PIZZERIA_SELECTION_PAGE_SIZE", "100"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.selection_page_size, 100);
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = AdminConfig::from_lookup(lookup(&[("PIZZERIA_PAGE_SIZE", "  ")])).unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_invalid_url() {
        let result = AdminConfig::from_lookup(lookup(&[("PIZZERIA_API_URL", "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(key, _)) if key == "PIZZERIA_API_URL"));

        let result = AdminConfig::from_lookup(lookup(&[("PIZZERIA_API_URL", "ftp://host/api")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_page_size() {
        let result = AdminConfig::from_lookup(lookup(&[("PIZZERIA_PAGE_SIZE", "0")]));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar(key, msg)) if key == "PIZZERIA_PAGE_SIZE" && msg.contains("at least"))
        );
    }

    #[test]
    fn test_non_numeric_page_size() {
        let result =
            AdminConfig::from_lookup(lookup(&[("PIZZERIA_SELECTION_PAGE_SIZE", "lots")]));
        assert!(result.is_err());
    }
}
