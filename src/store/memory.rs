// SPDX-License-Identifier: MPL-2.0
//! In-process store used when no project is configured, and by tests.

use super::{DocumentStore, StoreError, StoredRecord};
use crate::forms::FormRecord;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A record kept by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub record: FormRecord,
    pub created_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
    failure: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes all fail with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub async fn documents(&self) -> Vec<StoredDocument> {
        self.documents.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DocumentStore for MemoryStore {
    async fn add(&self, record: FormRecord) -> Result<StoredRecord, StoreError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let mut documents = self.documents.lock().await;
        let id = format!("{}-{}", record.collection, documents.len() + 1);
        let created_at = Utc::now();
        tracing::info!(collection = record.collection, %id, fields = ?record.fields, "record kept in memory");
        documents.push(StoredDocument {
            id: id.clone(),
            record,
            created_at,
        });
        Ok(StoredRecord { id, created_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_are_appended_in_order() {
        let store = MemoryStore::new();
        let first = store.add(FormRecord::new("contactMessages")).await.unwrap();
        let second = store.add(FormRecord::new("contactMessages")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);

        let documents = store.documents().await;
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].id, first.id);
    }

    #[tokio::test]
    async fn failing_store_keeps_nothing() {
        let store = MemoryStore::failing(StoreError::Transport("offline".into()));
        let result = store.add(FormRecord::new("volunteerApplications")).await;
        assert_eq!(result, Err(StoreError::Transport("offline".into())));
        assert!(store.is_empty().await);
    }
}
