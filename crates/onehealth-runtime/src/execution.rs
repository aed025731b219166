use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use onehealth_connector::metadata::{
    PARAM_FULL_TEXT_SEARCH, PARAM_LIMIT, PARAM_OPTIONS, PARAM_PAGE,
};
use onehealth_connector::{OneHealthExecutor, PatientSearch, SearchOptions};
use onehealth_core::{CredentialSource, InputItem, ItemOutcome, OutputItem, ParameterSource};

use crate::error::{RuntimeError, RuntimeResult};

/// Options for one run of the find-patient operation
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Name of the credential profile to resolve
    pub credential_profile: String,
    /// Emit an `{"error": ...}` record for a failed item instead of aborting
    pub continue_on_failure: bool,
    /// Pre-configured HTTP client, e.g. one with custom timeouts
    pub http_client: Option<reqwest::Client>,
}

impl RunOptions {
    pub fn new(credential_profile: impl Into<String>) -> Self {
        Self {
            credential_profile: credential_profile.into(),
            continue_on_failure: false,
            http_client: None,
        }
    }

    pub fn continue_on_failure(mut self, continue_on_failure: bool) -> Self {
        self.continue_on_failure = continue_on_failure;
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

/// Result of one run over the host's input items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Output records in input order
    pub outputs: Vec<OutputItem>,
    /// Item failure that stopped the run, if any
    pub failure: Option<ItemFailure>,
    /// Run metadata
    pub metadata: RunMetadata,
}

impl RunResult {
    /// Whether the run stopped before processing every item
    pub fn is_aborted(&self) -> bool {
        self.failure.is_some()
    }
}

/// Failure that aborted a run, reported with the offending item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub item_index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Unique run ID for tracing
    pub run_id: String,
    /// Number of input items received
    pub items_in: usize,
    /// Number of items that reached a terminal outcome
    pub items_processed: usize,
    /// Run duration in milliseconds
    pub duration_ms: u64,
    /// Timestamp of run start
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Execute the find-patient operation over a sequence of input items.
///
/// Credentials are resolved once, before the first item; a missing profile or
/// store failure is fatal and returns an error. Items are then processed
/// strictly in order, one request at a time. A failed item becomes an
/// `{"error": ...}` output record when `continue_on_failure` is set and
/// otherwise stops the loop, with the outputs already produced handed back
/// alongside the failure.
pub async fn execute_run(
    credentials: &dyn CredentialSource,
    parameters: &dyn ParameterSource,
    items: &[InputItem],
    options: RunOptions,
) -> RuntimeResult<RunResult> {
    let start_time = Instant::now();
    let timestamp = chrono::Utc::now();
    let run_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        run_id = %run_id,
        credential_profile = %options.credential_profile,
        items = items.len(),
        continue_on_failure = options.continue_on_failure,
        "Starting patient search run"
    );

    let profile = match credentials.resolve(&options.credential_profile).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Err(RuntimeError::credential_resolution(
                &options.credential_profile,
                "profile not found",
            ))
        }
        Err(e) => {
            return Err(RuntimeError::credential_resolution(
                &options.credential_profile,
                e.to_string(),
            ))
        }
    };

    let executor = match options.http_client {
        Some(client) => OneHealthExecutor::with_client(client, profile),
        None => {
            OneHealthExecutor::new(profile).map_err(|e| RuntimeError::execution(e.to_string()))?
        }
    };

    let mut outputs: Vec<OutputItem> = Vec::new();
    let mut failure: Option<ItemFailure> = None;
    let mut items_processed = 0;

    for item_index in 0..items.len() {
        let search = search_for_item(parameters, item_index);

        let outcome = match executor.find_patients(&search).await {
            Ok(records) => ItemOutcome::Success(records),
            Err(e) => ItemOutcome::Failure(e.to_string()),
        };
        items_processed += 1;

        match outcome {
            ItemOutcome::Success(records) => {
                outputs
                    .extend(records.into_iter().map(|record| OutputItem::new(record, item_index)));
            }
            ItemOutcome::Failure(message) if options.continue_on_failure => {
                tracing::warn!(
                    run_id = %run_id,
                    item = item_index,
                    error = %message,
                    "Item failed, continuing with error record"
                );
                outputs.push(OutputItem::error(message, item_index));
            }
            ItemOutcome::Failure(message) => {
                tracing::error!(
                    run_id = %run_id,
                    item = item_index,
                    error = %message,
                    "Item failed, aborting run"
                );
                failure = Some(ItemFailure { item_index, message });
                break;
            }
        }
    }

    let duration_ms = start_time.elapsed().as_millis() as u64;

    tracing::info!(
        run_id = %run_id,
        items_processed = items_processed,
        outputs = outputs.len(),
        aborted = failure.is_some(),
        duration_ms = duration_ms,
        "Patient search run finished"
    );

    Ok(RunResult {
        outputs,
        failure,
        metadata: RunMetadata {
            run_id,
            items_in: items.len(),
            items_processed,
            duration_ms,
            timestamp,
        },
    })
}

/// Read the declared parameters for one item and build its search.
///
/// Mirrors the declared schema: the full text field defaults to an empty
/// string, and the paging values live in the `options` group, absent unless
/// the host supplies integers for them.
fn search_for_item(parameters: &dyn ParameterSource, item_index: usize) -> PatientSearch {
    let text_value = parameters.parameter(PARAM_FULL_TEXT_SEARCH, item_index, json!(""));
    let search_text = text_value.as_str().unwrap_or_default().to_string();

    let options_value = parameters.parameter(PARAM_OPTIONS, item_index, json!({}));
    let limit = options_value.get(PARAM_LIMIT).and_then(JsonValue::as_u64);
    let page = options_value.get(PARAM_PAGE).and_then(JsonValue::as_u64);

    PatientSearch { search_text, options: SearchOptions { limit, page } }
}
