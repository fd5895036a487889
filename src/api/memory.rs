//! In-memory backend with server-side semantics, for tests and offline runs.
//!
//! Behaves like the real API: assigns v4 ids and RFC 3339 timestamps, merges
//! PATCH bodies, filters lists by equality, and does NOT cascade deletes —
//! removing an About leaves Education rows with a dangling `aboutId`.

use super::{ApiError, Backend};
use crate::config::{ResourceDescriptor, ResourceKind};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryBackend {
    rows: Mutex<HashMap<ResourceKind, Vec<Value>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, returning its assigned id.
    pub fn seed(&self, kind: ResourceKind, body: Map<String, Value>) -> Uuid {
        let (id, record) = stamp(body);
        self.lock().entry(kind).or_default().push(record);
        id
    }

    /// Remove a record without going through `delete`. Returns whether a
    /// record was removed.
    pub fn remove(&self, kind: ResourceKind, id: Uuid) -> bool {
        let mut rows = self.lock();
        let store = rows.entry(kind).or_default();
        let before = store.len();
        store.retain(|record| !matches_id(record, id));
        store.len() != before
    }

    pub fn count(&self, kind: ResourceKind) -> usize {
        self.lock().get(&kind).map(Vec::len).unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ResourceKind, Vec<Value>>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn list(
        &self,
        descriptor: &ResourceDescriptor,
        filters: &[(String, String)],
    ) -> Result<Vec<Value>, ApiError> {
        let rows = self.lock();
        let store = rows.get(&descriptor.kind).map(Vec::as_slice).unwrap_or(&[]);
        Ok(store
            .iter()
            .filter(|record| {
                filters
                    .iter()
                    .all(|(field, value)| field_matches(record, field, value))
            })
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let (_, record) = stamp(body.clone());
        self.lock()
            .entry(descriptor.kind)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        descriptor: &ResourceDescriptor,
        id: Uuid,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let mut rows = self.lock();
        let store = rows.entry(descriptor.kind).or_default();
        let record = store
            .iter_mut()
            .find(|record| matches_id(record, id))
            .ok_or_else(|| not_found(descriptor, id))?;
        if let Value::Object(object) = record {
            for (field, value) in body {
                object.insert(field.clone(), value.clone());
            }
            object.insert(
                "updatedAt".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }
        Ok(record.clone())
    }

    async fn delete(&self, descriptor: &ResourceDescriptor, id: Uuid) -> Result<(), ApiError> {
        let mut rows = self.lock();
        let store = rows.entry(descriptor.kind).or_default();
        let before = store.len();
        store.retain(|record| !matches_id(record, id));
        if store.len() == before {
            return Err(not_found(descriptor, id));
        }
        Ok(())
    }
}

fn stamp(mut body: Map<String, Value>) -> (Uuid, Value) {
    let id = Uuid::new_v4();
    let now = Utc::now().to_rfc3339();
    body.insert("id".to_string(), Value::String(id.to_string()));
    body.insert("createdAt".to_string(), Value::String(now.clone()));
    body.insert("updatedAt".to_string(), Value::String(now));
    (id, Value::Object(body))
}

fn matches_id(record: &Value, id: Uuid) -> bool {
    record
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        == Some(id)
}

fn field_matches(record: &Value, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

fn not_found(descriptor: &ResourceDescriptor, id: Uuid) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!("{} {} not found", descriptor.kind, id),
    }
}
