use crate::error::CoreResult;
use crate::types::{CredentialProfile, CredentialRecord};
use async_trait::async_trait;

/// Read-only seam through which a run resolves its credentials.
///
/// Resolution happens once per run, before any item is processed; any error
/// or missing profile aborts the run.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Resolve a credential profile by name
    async fn resolve(&self, name: &str) -> CoreResult<Option<CredentialProfile>>;
}

/// Async trait for storing and retrieving credential records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert or update a credential record
    async fn upsert(&self, record: &CredentialRecord) -> CoreResult<()>;
    /// Get a credential record by name
    async fn get(&self, name: &str) -> CoreResult<Option<CredentialRecord>>;
    /// Delete a credential record by name, returns true if deleted
    async fn delete(&self, name: &str) -> CoreResult<bool>;
    /// List the names of all stored profiles
    async fn list_names(&self) -> CoreResult<Vec<String>>;
}
