use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// Credentials for one 1Health tenant
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialProfile {
    pub api_key: String,
    pub base_url: String,
}

impl CredentialProfile {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: base_url.into() }
    }
}

// The API key must never reach logs through Debug formatting
impl fmt::Debug for CredentialProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialProfile")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// A named credential profile as persisted by a host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub name: String,
    pub profile: CredentialProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

/// One element of the host's input stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputItem {
    pub json: JsonValue,
}

impl InputItem {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }
}

/// One element of the produced output stream, tagged with the index of the
/// input item that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    pub json: JsonValue,
    pub source_item: usize,
}

impl OutputItem {
    pub fn new(json: JsonValue, source_item: usize) -> Self {
        Self { json, source_item }
    }

    /// Error record emitted for a failed item when the run continues on failure
    pub fn error(message: impl Into<String>, source_item: usize) -> Self {
        Self { json: json!({ "error": message.into() }), source_item }
    }

    /// Whether this output is an error record rather than response data
    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }
}

/// Terminal outcome of processing a single input item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Records returned by the service for this item
    Success(Vec<JsonValue>),
    /// Human-readable message describing why this item failed
    Failure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_output_wraps_message() {
        let output = OutputItem::error("timeout", 3);
        assert_eq!(output.json, json!({"error": "timeout"}));
        assert_eq!(output.source_item, 3);
        assert!(output.is_error());
    }

    #[test]
    fn record_output_is_not_error() {
        let output = OutputItem::new(json!({"id": 1}), 0);
        assert!(!output.is_error());
    }

    #[test]
    fn debug_masks_api_key() {
        let profile = CredentialProfile::new("super-secret", "https://demo.1health.io");
        let rendered = format!("{:?}", profile);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("https://demo.1health.io"));
    }
}
