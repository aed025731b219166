pub mod actions;
pub mod error;
pub mod executor;
pub mod metadata;
pub mod url_builder;
pub mod validator;

// Re-export commonly used types
pub use actions::{PatientSearch, SearchOptions, PATIENT_SEARCH_PATH};
pub use error::{ConnectorError, ConnectorResult};
pub use executor::OneHealthExecutor;
pub use metadata::{
    connector_metadata, credential_fields, parameter_fields, ConnectorMetadata, FieldSchema,
    OperationMetadata, DEFAULT_BASE_URL,
};
pub use validator::{validate_credential_profile, validate_search_options};
