use async_trait::async_trait;
use chrono::Utc;
use onehealth_core::{
    CoreResult, CredentialProfile, CredentialRecord, CredentialSource, CredentialStore,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of CredentialStore for testing and embedding
#[derive(Debug, Clone)]
pub struct MemoryCredentialStore {
    data: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self { data: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Store a bare profile under a name, wrapping it in a record.
    /// An existing record keeps its creation time and gets a version bump.
    pub async fn upsert_profile(
        &self,
        name: impl Into<String>,
        profile: CredentialProfile,
    ) -> CoreResult<()> {
        let name = name.into();
        let now = Utc::now();
        let mut data = self.data.write().await;
        let record = match data.get(&name) {
            Some(existing) => CredentialRecord {
                name: name.clone(),
                profile,
                created_at: existing.created_at,
                updated_at: now,
                version: existing.version + 1,
            },
            None => CredentialRecord {
                name: name.clone(),
                profile,
                created_at: now,
                updated_at: now,
                version: 1,
            },
        };
        data.insert(name, record);
        Ok(())
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn upsert(&self, record: &CredentialRecord) -> CoreResult<()> {
        let mut data = self.data.write().await;
        data.insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, name: &str) -> CoreResult<Option<CredentialRecord>> {
        let data = self.data.read().await;
        Ok(data.get(name).cloned())
    }

    async fn delete(&self, name: &str) -> CoreResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.remove(name).is_some())
    }

    async fn list_names(&self) -> CoreResult<Vec<String>> {
        let data = self.data.read().await;
        Ok(data.keys().cloned().collect())
    }
}

#[async_trait]
impl CredentialSource for MemoryCredentialStore {
    async fn resolve(&self, name: &str) -> CoreResult<Option<CredentialProfile>> {
        let data = self.data.read().await;
        Ok(data.get(name).map(|record| record.profile.clone()))
    }
}
