// SPDX-License-Identifier: MPL-2.0
//! Document store seam.
//!
//! Forms only append records; nothing is ever read back. Each write returns
//! the document id and the creation timestamp assigned by the store.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::forms::FormRecord;
use chrono::{DateTime, Utc};
use std::future::Future;
use thiserror::Error;

/// Name of the server-assigned timestamp field.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Why a write did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never got a response.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The store answered with an error status.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The response could not be understood.
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Acknowledgement of a stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// An append-only collection store.
pub trait DocumentStore: Clone + Send + Sync + 'static {
    /// Appends `record` to its collection.
    fn add(
        &self,
        record: FormRecord,
    ) -> impl Future<Output = std::result::Result<StoredRecord, StoreError>> + Send;
}

/// The store selected by the configuration.
#[derive(Debug, Clone)]
pub enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

impl Backend {
    /// Uses Firestore when a project is configured, an in-process store
    /// otherwise.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        match config.project_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(project_id) => Ok(Backend::Firestore(FirestoreStore::new(
                &config.endpoint,
                project_id,
                &config.database,
                config.api_key.clone(),
            )?)),
            None => {
                tracing::warn!("no store project configured, records stay in memory");
                Ok(Backend::Memory(MemoryStore::new()))
            }
        }
    }
}

impl DocumentStore for Backend {
    async fn add(&self, record: FormRecord) -> std::result::Result<StoredRecord, StoreError> {
        match self {
            Backend::Firestore(store) => store.add(record).await,
            Backend::Memory(store) => store.add(record).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_selects_memory_store() {
        let backend = Backend::from_config(&StoreConfig::default()).unwrap();
        assert!(matches!(backend, Backend::Memory(_)));

        let blank = StoreConfig {
            project_id: Some("  ".into()),
            ..StoreConfig::default()
        };
        assert!(matches!(
            Backend::from_config(&blank).unwrap(),
            Backend::Memory(_)
        ));
    }

    #[test]
    fn configured_project_selects_firestore() {
        let config = StoreConfig {
            project_id: Some("community-site".into()),
            ..StoreConfig::default()
        };
        assert!(matches!(
            Backend::from_config(&config).unwrap(),
            Backend::Firestore(_)
        ));
    }

    #[test]
    fn rejection_display_includes_status() {
        let err = StoreError::Rejected {
            status: 403,
            message: "PERMISSION_DENIED".into(),
        };
        assert_eq!(err.to_string(), "rejected with status 403: PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn backend_dispatches_to_memory() {
        let store = MemoryStore::new();
        let backend = Backend::Memory(store.clone());
        backend.add(FormRecord::new("contactMessages")).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
