use serde::Serialize;
use serde_json::{json, Value as JsonValue};

/// Connector identity surfaced to host catalogs
pub const CONNECTOR_KIND: &str = "onehealth";

/// Base URL of the hosted demo instance, the declared credential default
pub const DEFAULT_BASE_URL: &str = "https://demo.1health.io";

/// Declared parameter names the run loop reads per item
pub const PARAM_FULL_TEXT_SEARCH: &str = "fullTextSearchOnPerson";
pub const PARAM_OPTIONS: &str = "options";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_PAGE: &str = "page";

/// Resource and operation identifiers
pub const RESOURCE_PATIENT: &str = "patient";
pub const OPERATION_FIND: &str = "find";

/// Declared bounds and defaults for the find operation's options
pub const LIMIT_MIN: u64 = 1;
pub const LIMIT_MAX: u64 = 1000;
pub const DEFAULT_LIMIT: u64 = 50;
pub const DEFAULT_PAGE: u64 = 0;

/// Connector description surfaced to hosts
#[derive(Debug, Clone, Serialize)]
pub struct ConnectorMetadata {
    pub kind: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
    pub documentation_url: String,
    pub api_reference_url: String,
    pub operations: Vec<OperationMetadata>,
    pub version: String,
    pub example_config: Option<JsonValue>,
}

/// One operation the connector offers
#[derive(Debug, Clone, Serialize)]
pub struct OperationMetadata {
    pub resource: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub action: String,
}

/// One field a host collects, for credentials or operation parameters
#[derive(Debug, Clone, Serialize)]
pub struct FieldSchema {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub secret: bool,
    pub default: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

pub fn connector_metadata() -> ConnectorMetadata {
    ConnectorMetadata {
        kind: CONNECTOR_KIND.to_string(),
        display_name: "1Health".to_string(),
        description: "Patient management and search".to_string(),
        category: "Healthcare".to_string(),
        documentation_url: "https://docs.1health.io/".to_string(),
        api_reference_url: "https://demo.1health.io/api/docs".to_string(),
        operations: vec![OperationMetadata {
            resource: RESOURCE_PATIENT.to_string(),
            name: OPERATION_FIND.to_string(),
            display_name: "Find Patient Full Text".to_string(),
            description: "Search patients by firstName, lastName, or birthDate".to_string(),
            action: "Find patient using full text search".to_string(),
        }],
        version: env!("CARGO_PKG_VERSION").to_string(),
        example_config: Some(json!({
            "credential": {
                "apiKey": "your-api-key",
                "baseUrl": DEFAULT_BASE_URL,
            },
            "parameters": {
                "fullTextSearchOnPerson": "John Doe",
                "options": { "limit": 50, "page": 0 },
            },
        })),
    }
}

/// Fields a host collects for one credential profile
pub fn credential_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema {
            name: "apiKey",
            display_name: "API Key",
            description: "Your 1Health API Key for authentication",
            required: true,
            secret: true,
            default: json!(""),
            placeholder: None,
            group: None,
            min: None,
            max: None,
        },
        FieldSchema {
            name: "baseUrl",
            display_name: "Base URL",
            description: "Base URL of your 1Health instance",
            required: true,
            secret: false,
            default: json!(DEFAULT_BASE_URL),
            placeholder: None,
            group: None,
            min: None,
            max: None,
        },
    ]
}

/// Declared parameters of the find operation
pub fn parameter_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema {
            name: PARAM_FULL_TEXT_SEARCH,
            display_name: "Full Text Search On Person",
            description: "Search patients by firstName, lastName, or birthDate",
            required: false,
            secret: false,
            default: json!(""),
            placeholder: Some("John Doe"),
            group: None,
            min: None,
            max: None,
        },
        FieldSchema {
            name: PARAM_LIMIT,
            display_name: "Limit",
            description: "Max number of results to return",
            required: false,
            secret: false,
            default: json!(DEFAULT_LIMIT),
            placeholder: None,
            group: Some(PARAM_OPTIONS),
            min: Some(LIMIT_MIN),
            max: Some(LIMIT_MAX),
        },
        FieldSchema {
            name: PARAM_PAGE,
            display_name: "Page",
            description: "Page number to retrieve",
            required: false,
            secret: false,
            default: json!(DEFAULT_PAGE),
            placeholder: None,
            group: Some(PARAM_OPTIONS),
            min: Some(0),
            max: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_the_find_operation() {
        let metadata = connector_metadata();
        assert_eq!(metadata.kind, CONNECTOR_KIND);
        assert_eq!(metadata.operations.len(), 1);
        assert_eq!(metadata.operations[0].resource, RESOURCE_PATIENT);
        assert_eq!(metadata.operations[0].name, OPERATION_FIND);
    }

    #[test]
    fn api_key_is_secret_and_required() {
        let fields = credential_fields();
        let api_key = fields.iter().find(|f| f.name == "apiKey").unwrap();
        assert!(api_key.secret);
        assert!(api_key.required);

        let base_url = fields.iter().find(|f| f.name == "baseUrl").unwrap();
        assert_eq!(base_url.default, json!(DEFAULT_BASE_URL));
    }

    #[test]
    fn paging_fields_declare_their_bounds() {
        let fields = parameter_fields();
        let limit = fields.iter().find(|f| f.name == PARAM_LIMIT).unwrap();
        assert_eq!(limit.min, Some(LIMIT_MIN));
        assert_eq!(limit.max, Some(LIMIT_MAX));
        assert_eq!(limit.group, Some(PARAM_OPTIONS));

        let page = fields.iter().find(|f| f.name == PARAM_PAGE).unwrap();
        assert_eq!(page.default, json!(0));
        assert_eq!(page.max, None);
    }
}
