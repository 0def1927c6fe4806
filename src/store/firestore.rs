// SPDX-License-Identifier: MPL-2.0
//! Cloud Firestore over its REST API.
//!
//! A record is written with a single `documents:commit` call:
//!
//! - the document id is generated locally (20 alphanumeric characters)
//! - the write is a precondition-guarded create (`exists: false`)
//! - `createdAt` is filled by a `REQUEST_TIME` server transform whose result
//!   comes back in the commit response

use super::{DocumentStore, StoreError, StoredRecord, CREATED_AT_FIELD};
use crate::error::Result;
use crate::forms::{FieldValue, FormRecord};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

const USER_AGENT: &str = concat!("CommunitySite/", env!("CARGO_PKG_VERSION"));

/// Length of generated document ids.
pub const DOCUMENT_ID_LEN: usize = 20;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    commit_url: Url,
    /// `projects/{project}/databases/{database}/documents`
    documents_root: String,
}

impl FirestoreStore {
    pub fn new(
        endpoint: &str,
        project_id: &str,
        database: &str,
        api_key: Option<String>,
    ) -> Result<Self> {
        let documents_root = format!("projects/{project_id}/databases/{database}/documents");
        let mut commit_url = Url::parse(&format!(
            "{}/{documents_root}:commit",
            endpoint.trim_end_matches('/')
        ))?;
        if let Some(key) = api_key.filter(|key| !key.is_empty()) {
            commit_url.query_pairs_mut().append_pair("key", &key);
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            commit_url,
            documents_root,
        })
    }

    pub fn commit_url(&self) -> &Url {
        &self.commit_url
    }

    /// Full resource name of a new document.
    pub fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.documents_root)
    }
}

impl DocumentStore for FirestoreStore {
    async fn add(&self, record: FormRecord) -> std::result::Result<StoredRecord, StoreError> {
        let id = generate_document_id(record.collection);
        let name = self.document_name(record.collection, &id);
        let body = commit_body(&name, &record);
        let payload =
            serde_json::to_vec(&body).map_err(|err| StoreError::Decode(err.to_string()))?;

        let response = self
            .client
            .post(self.commit_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: error_message(&bytes),
            });
        }

        let created_at = parse_commit_response(&bytes)?;
        tracing::debug!(document = %name, "document created");
        Ok(StoredRecord { id, created_at })
    }
}

/// Derives a fresh document id from the collection, the clock and a process
/// counter.
pub fn generate_document_id(collection: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut hasher = blake3::Hasher::new();
    hasher.update(collection.as_bytes());
    hasher.update(&nanos.to_le_bytes());
    hasher.update(&counter.to_le_bytes());
    hasher.update(&std::process::id().to_le_bytes());
    let hash = hasher.finalize();

    hash.as_bytes()
        .iter()
        .take(DOCUMENT_ID_LEN)
        .map(|byte| ID_ALPHABET[usize::from(*byte) % ID_ALPHABET.len()] as char)
        .collect()
}

/// Converts a field value to the typed JSON form the REST API expects.
pub fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => json!({ "stringValue": text }),
        // 64-bit integers travel as strings.
        FieldValue::Integer(n) => json!({ "integerValue": n.to_string() }),
        FieldValue::Double(x) => json!({ "doubleValue": x }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        FieldValue::List(values) => json!({
            "arrayValue": { "values": values.iter().map(encode_value).collect::<Vec<_>>() }
        }),
    }
}

fn encode_fields(record: &FormRecord) -> Value {
    let fields: Map<String, Value> = record
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect();
    Value::Object(fields)
}

/// Request body for creating `name` from `record`.
pub fn commit_body(name: &str, record: &FormRecord) -> Value {
    json!({
        "writes": [{
            "update": {
                "name": name,
                "fields": encode_fields(record),
            },
            "currentDocument": { "exists": false },
            "updateTransforms": [{
                "fieldPath": CREATED_AT_FIELD,
                "setToServerValue": "REQUEST_TIME",
            }],
        }]
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitResponse {
    #[serde(default)]
    write_results: Vec<WriteResult>,
    commit_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WriteResult {
    #[serde(default)]
    transform_results: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Reads the server-assigned creation time from a commit response. Falls
/// back to the commit time when no transform result is present.
pub fn parse_commit_response(bytes: &[u8]) -> std::result::Result<DateTime<Utc>, StoreError> {
    let response: CommitResponse =
        serde_json::from_slice(bytes).map_err(|err| StoreError::Decode(err.to_string()))?;

    let timestamp = response
        .write_results
        .first()
        .and_then(|result| result.transform_results.first())
        .and_then(|value| value.get("timestampValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or(response.commit_time)
        .ok_or_else(|| StoreError::Decode("no timestamp in commit response".to_string()))?;

    DateTime::parse_from_rfc3339(&timestamp)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| StoreError::Decode(format!("bad timestamp {timestamp:?}: {err}")))
}

fn error_message(bytes: &[u8]) -> String {
    match serde_json::from_slice::<ErrorEnvelope>(bytes) {
        Ok(envelope) if !envelope.error.status.is_empty() => {
            format!("{}: {}", envelope.error.status, envelope.error.message)
        }
        Ok(envelope) => envelope.error.message,
        Err(_) => String::from_utf8_lossy(bytes).trim().to_string(),
    }
}
