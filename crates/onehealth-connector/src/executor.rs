use crate::actions::{PatientSearch, PATIENT_SEARCH_PATH};
use crate::error::{ConnectorError, ConnectorResult};
use crate::url_builder::UrlBuilder;
use onehealth_core::CredentialProfile;
use reqwest::Url;
use serde_json::Value as JsonValue;

/// HTTP executor that performs patient searches against one 1Health tenant
pub struct OneHealthExecutor {
    client: reqwest::Client,
    profile: CredentialProfile,
}

impl OneHealthExecutor {
    /// Create an executor with a default HTTP client
    pub fn new(profile: CredentialProfile) -> ConnectorResult<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, profile })
    }

    /// Create an executor around a pre-configured client, e.g. one with
    /// custom timeouts or proxy settings
    pub fn with_client(client: reqwest::Client, profile: CredentialProfile) -> Self {
        Self { client, profile }
    }

    /// Execute one patient search and return the response records.
    ///
    /// The response body must be a JSON array; anything else is reported as a
    /// malformed response. Non-2xx statuses surface as HTTP errors carrying
    /// the status code.
    pub async fn find_patients(&self, search: &PatientSearch) -> ConnectorResult<Vec<JsonValue>> {
        let request_url = self.build_url(search)?;

        tracing::debug!(url = %request_url, "Dispatching patient search");

        let response = self
            .client
            .post(request_url)
            .bearer_auth(&self.profile.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body: JsonValue = response.json().await?;
        match body {
            JsonValue::Array(records) => Ok(records),
            other => Err(ConnectorError::MalformedResponse(format!(
                "expected a JSON array of patient records, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Endpoint URL with this search's query parameters applied
    fn build_url(&self, search: &PatientSearch) -> ConnectorResult<Url> {
        let joined = UrlBuilder::join(&self.profile.base_url, PATIENT_SEARCH_PATH)?;
        let mut url = Url::parse(&joined)
            .map_err(|e| ConnectorError::InvalidConfig(format!("Invalid URL: {}", e)))?;

        for (key, value) in search.query_params() {
            url.query_pairs_mut().append_pair(key, &value);
        }

        Ok(url)
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn executor_for(server: &MockServer) -> OneHealthExecutor {
        OneHealthExecutor::new(CredentialProfile::new("test-key", server.base_url())).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_posts_with_bearer_and_json_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(PATIENT_SEARCH_PATH)
                .header("authorization", "Bearer test-key")
                .header("content-type", "application/json")
                .header("accept", "application/json")
                .query_param("fullTextSearchOnPerson", "John Doe");
            then.status(200).json_body(json!([]));
        });

        let executor = executor_for(&server);
        let records = executor.find_patients(&PatientSearch::new("John Doe")).await.unwrap();

        assert!(records.is_empty());
        mock.assert();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_paging_values_reach_the_query_string() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(PATIENT_SEARCH_PATH)
                .query_param("size", "10")
                .query_param("page", "1");
            then.status(200).json_body(json!([]));
        });

        let executor = executor_for(&server);
        let search = PatientSearch::default().with_limit(10).with_page(1);
        executor.find_patients(&search).await.unwrap();

        mock.assert();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_records_are_returned_in_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATIENT_SEARCH_PATH);
            then.status(200).json_body(json!([{"id": 1}, {"id": 2}]));
        });

        let executor = executor_for(&server);
        let records = executor.find_patients(&PatientSearch::new("John Doe")).await.unwrap();

        assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_status_errors_surface() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATIENT_SEARCH_PATH);
            then.status(500);
        });

        let executor = executor_for(&server);
        let err = executor.find_patients(&PatientSearch::new("John Doe")).await.unwrap_err();

        assert!(matches!(err, ConnectorError::Http(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_non_array_body_is_malformed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(PATIENT_SEARCH_PATH);
            then.status(200).json_body(json!({"total": 0}));
        });

        let executor = executor_for(&server);
        let err = executor.find_patients(&PatientSearch::default()).await.unwrap_err();

        assert!(matches!(err, ConnectorError::MalformedResponse(_)));
        assert!(err.to_string().contains("object"));
    }
}
