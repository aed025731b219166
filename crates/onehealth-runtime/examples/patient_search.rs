//! Runs a patient search against a live 1Health instance.
//!
//! ```bash
//! export ONEHEALTH_API_KEY=your-api-key
//! export ONEHEALTH_BASE_URL=https://demo.1health.io   # optional
//! cargo run --example patient_search -- "John Doe"
//! ```

use anyhow::{Context, Result};
use serde_json::json;

use onehealth_connector::metadata::{DEFAULT_BASE_URL, PARAM_FULL_TEXT_SEARCH, PARAM_OPTIONS};
use onehealth_core::{CredentialProfile, InputItem};
use onehealth_runtime::{execute_run, RunOptions, UniformParameters};
use onehealth_store::MemoryCredentialStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api_key =
        std::env::var("ONEHEALTH_API_KEY").context("ONEHEALTH_API_KEY must be set")?;
    let base_url =
        std::env::var("ONEHEALTH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let search_text = std::env::args().nth(1).unwrap_or_else(|| "John Doe".to_string());

    let store = MemoryCredentialStore::new();
    store
        .upsert_profile("default", CredentialProfile::new(api_key, base_url))
        .await?;

    let parameters = UniformParameters::new()
        .set(PARAM_FULL_TEXT_SEARCH, json!(search_text))
        .set(PARAM_OPTIONS, json!({ "limit": 10 }));

    let items = vec![InputItem::new(json!({}))];
    let options = RunOptions::new("default").continue_on_failure(true);

    let result = execute_run(&store, &parameters, &items, options).await?;

    for output in &result.outputs {
        println!(
            "[item {}] {}",
            output.source_item,
            serde_json::to_string_pretty(&output.json)?
        );
    }
    println!(
        "run {} produced {} output(s) in {}ms",
        result.metadata.run_id,
        result.outputs.len(),
        result.metadata.duration_ms
    );

    Ok(())
}
