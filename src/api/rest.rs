//! REST transport over reqwest.

use super::{ApiError, Backend};
use crate::config::ResourceDescriptor;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::{Map, Value};
use std::time::Duration;
use uuid::Uuid;

/// Backend the dashboard was deployed against; override with `FOLIO_API_URL`.
pub const DEFAULT_BASE_URL: &str = "https://server-dashbord.vercel.app";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Read `FOLIO_API_URL` and `FOLIO_HTTP_TIMEOUT_SECS` from the
    /// environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FOLIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("FOLIO_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self { base_url, timeout }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client issuing JSON requests against the per-resource paths. No
/// retries, no de-duplication, no cancellation of in-flight requests.
pub struct RestBackend {
    http: Client,
    base: Url,
}

impl RestBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base = Url::parse(&config.base_url).map_err(|e| ApiError::BaseUrl(e.to_string()))?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("folio-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, base })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::BaseUrl(e.to_string()))
    }

    async fn read_json(res: Response) -> Result<Value, ApiError> {
        let status = res.status();
        if status.is_success() {
            res.json::<Value>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn list(
        &self,
        descriptor: &ResourceDescriptor,
        filters: &[(String, String)],
    ) -> Result<Vec<Value>, ApiError> {
        let mut url = self.url(&descriptor.list_path())?;
        for (field, value) in filters {
            url.query_pairs_mut().append_pair(field, value);
        }
        tracing::debug!(url = %url, kind = %descriptor.kind, "list");
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = Self::read_json(res).await?;
        decode_list(descriptor, body)
    }

    async fn create(
        &self,
        descriptor: &ResourceDescriptor,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(&descriptor.create_path())?;
        tracing::debug!(url = %url, kind = %descriptor.kind, "create");
        let res = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_json(res).await
    }

    async fn update(
        &self,
        descriptor: &ResourceDescriptor,
        id: Uuid,
        body: &Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(&descriptor.item_path(id))?;
        tracing::debug!(url = %url, kind = %descriptor.kind, "update");
        let res = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        Self::read_json(res).await
    }

    async fn delete(&self, descriptor: &ResourceDescriptor, id: Uuid) -> Result<(), ApiError> {
        let url = self.url(&descriptor.item_path(id))?;
        tracing::debug!(url = %url, kind = %descriptor.kind, "delete");
        let res = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = res.status();
        if status.is_success() {
            // Some endpoints return the deleted record, others nothing.
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Unwrap the list payload. Blog, project, and skill lists arrive inside a
/// `{"data": [...]}` envelope; the other kinds are bare arrays.
fn decode_list(descriptor: &ResourceDescriptor, body: Value) -> Result<Vec<Value>, ApiError> {
    if descriptor.list_envelope {
        match body {
            Value::Object(mut object) => match object.remove("data") {
                Some(Value::Array(rows)) => Ok(rows),
                _ => Err(ApiError::Decode(format!(
                    "{} list is missing its data envelope",
                    descriptor.kind
                ))),
            },
            _ => Err(ApiError::Decode(format!(
                "{} list is not an enveloped object",
                descriptor.kind
            ))),
        }
    } else {
        match body {
            Value::Array(rows) => Ok(rows),
            _ => Err(ApiError::Decode(format!(
                "{} list is not an array",
                descriptor.kind
            ))),
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}
