use async_trait::async_trait;
use onehealth_core::{
    CoreError, CoreResult, CredentialProfile, CredentialRecord, CredentialSource, CredentialStore,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Credential store persisting records as one JSON document on disk.
///
/// The document maps profile names to records. A missing file reads as an
/// empty store; the file is created on the first write.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the document
    lock: Arc<RwLock<()>>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Arc::new(RwLock::new(())) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> CoreResult<HashMap<String, CredentialRecord>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| CoreError::Io(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        serde_json::from_str(&content).map_err(|e| CoreError::Serde(e.to_string()))
    }

    fn write_document(&self, document: &HashMap<String, CredentialRecord>) -> CoreResult<()> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| CoreError::Serde(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| CoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn upsert(&self, record: &CredentialRecord) -> CoreResult<()> {
        let _guard = self.lock.write().await;
        let mut document = self.read_document()?;
        document.insert(record.name.clone(), record.clone());
        self.write_document(&document)
    }

    async fn get(&self, name: &str) -> CoreResult<Option<CredentialRecord>> {
        let _guard = self.lock.read().await;
        let document = self.read_document()?;
        Ok(document.get(name).cloned())
    }

    async fn delete(&self, name: &str) -> CoreResult<bool> {
        let _guard = self.lock.write().await;
        let mut document = self.read_document()?;
        let removed = document.remove(name).is_some();
        if removed {
            self.write_document(&document)?;
        }
        Ok(removed)
    }

    async fn list_names(&self) -> CoreResult<Vec<String>> {
        let _guard = self.lock.read().await;
        let document = self.read_document()?;
        Ok(document.keys().cloned().collect())
    }
}

#[async_trait]
impl CredentialSource for FileCredentialStore {
    async fn resolve(&self, name: &str) -> CoreResult<Option<CredentialProfile>> {
        let _guard = self.lock.read().await;
        let document = self.read_document()?;
        Ok(document.get(name).map(|record| record.profile.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record(name: &str) -> CredentialRecord {
        CredentialRecord {
            name: name.to_string(),
            profile: CredentialProfile::new("test-key", "https://demo.1health.io"),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            version: 1,
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        assert!(store.get("demo").await.unwrap().is_none());
        assert!(store.list_names().await.unwrap().is_empty());
        assert!(!store.delete("demo").await.unwrap());
    }

    #[tokio::test]
    async fn test_records_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");

        let store = FileCredentialStore::new(&path);
        store.upsert(&sample_record("demo")).await.unwrap();

        // A fresh instance reads the same document
        let reopened = FileCredentialStore::new(&path);
        let record = reopened.get("demo").await.unwrap().unwrap();
        assert_eq!(record.profile.api_key, "test-key");

        let resolved = reopened.resolve("demo").await.unwrap().unwrap();
        assert_eq!(resolved.base_url, "https://demo.1health.io");
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("credentials.json"));

        store.upsert(&sample_record("demo")).await.unwrap();
        assert!(store.delete("demo").await.unwrap());
        assert!(store.get("demo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_document_surfaces_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::new(&path);
        let err = store.get("demo").await.unwrap_err();
        assert!(matches!(err, CoreError::Serde(_)));
    }
}
