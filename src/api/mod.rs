//! Backend transport seam: the REST implementation and an in-memory fake.

mod memory;
mod rest;

pub use memory::MemoryBackend;
pub use rest::{ClientConfig, RestBackend, DEFAULT_BASE_URL};

use crate::config::ResourceDescriptor;
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {body}")]
    Status { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

/// The four operations every resource endpoint exposes. Pages talk to this
/// trait only; `RestBackend` is the real thing, `MemoryBackend` stands in
/// for tests and offline runs.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch the list, optionally narrowed by `field=value` query filters
    /// (used by project-feature and project-credential lists scoped to a
    /// project).
    async fn list(
        &self,
        descriptor: &ResourceDescriptor,
        filters: &[(String, String)],
    ) -> Result<Vec<Value>, ApiError>;

    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError>;

    async fn update(
        &self,
        descriptor: &ResourceDescriptor,
        id: Uuid,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError>;

    async fn delete(&self, descriptor: &ResourceDescriptor, id: Uuid) -> Result<(), ApiError>;
}
