//! URL building utilities for the 1Health connector

use crate::error::{ConnectorError, ConnectorResult};
use url::Url;

/// URL builder that appends endpoint paths to a configured base URL
pub struct UrlBuilder;

impl UrlBuilder {
    /// Append `path` to `base_url`, handling slashes and encoding properly.
    ///
    /// The endpoint path always extends the base URL's own path, so a tenant
    /// base URL carrying a path prefix keeps it:
    ///
    /// - `join("https://demo.1health.io", "/api/v2")` -> `https://demo.1health.io/api/v2`
    /// - `join("https://demo.1health.io/", "/api/v2")` -> `https://demo.1health.io/api/v2`
    /// - `join("https://host.example.com/ehr", "/api/v2")` -> `https://host.example.com/ehr/api/v2`
    pub fn join(base_url: &str, path: &str) -> ConnectorResult<String> {
        let mut base = Url::parse(base_url).map_err(|e| {
            ConnectorError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        if path.is_empty() {
            return Ok(base.to_string());
        }

        // A relative join against a trailing-slash base appends instead of
        // replacing the base path
        let base_path = base.path();
        if !base_path.ends_with('/') {
            base.set_path(&format!("{}/", base_path));
        }

        let result = base.join(path.trim_start_matches('/')).map_err(|e| {
            ConnectorError::InvalidConfig(format!(
                "Failed to join URL '{}' with path '{}': {}",
                base_url, path, e
            ))
        })?;

        Ok(result.to_string())
    }

    /// Validate that a URL is well-formed
    pub fn validate(url: &str) -> ConnectorResult<()> {
        Url::parse(url)
            .map_err(|e| ConnectorError::InvalidConfig(format!("Invalid URL '{}': {}", url, e)))?;
        Ok(())
    }
}
