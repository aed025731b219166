use crate::actions::SearchOptions;
use crate::error::{ConnectorError, ConnectorResult};
use crate::metadata::{LIMIT_MAX, LIMIT_MIN};
use crate::url_builder::UrlBuilder;
use onehealth_core::CredentialProfile;

/// Validate a credential profile before it is stored or used
pub fn validate_credential_profile(profile: &CredentialProfile) -> ConnectorResult<()> {
    if profile.api_key.trim().is_empty() {
        return Err(ConnectorError::InvalidConfig(
            "credential requires a non-empty 'apiKey'".into(),
        ));
    }

    if !(profile.base_url.starts_with("http://") || profile.base_url.starts_with("https://")) {
        return Err(ConnectorError::InvalidConfig(
            "credential 'baseUrl' must begin with http:// or https://".into(),
        ));
    }

    UrlBuilder::validate(&profile.base_url)
}

/// Schema-level check of the declared option ranges.
///
/// Hosts run this when collecting parameters. The wire mapping itself accepts
/// whatever values it is handed and applies the zero-omission rule instead
/// (see `PatientSearch::query_params`).
pub fn validate_search_options(options: &SearchOptions) -> ConnectorResult<()> {
    if let Some(limit) = options.limit {
        if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            return Err(ConnectorError::Validation(format!(
                "limit must be between {} and {}, got {}",
                LIMIT_MIN, LIMIT_MAX, limit
            )));
        }
    }
    Ok(())
}
