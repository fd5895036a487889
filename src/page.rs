//! Generic resource page: one list query, a modal form, and the three
//! mutations, driven entirely by the kind's descriptor.
//!
//! Load and modal state advance independently:
//! idle -> loading -> ready | error, and closed -> open(create|edit) ->
//! closed. Every successful mutation invalidates the kind's cached list
//! exactly once, emits a success toast, closes the modal, and reloads so
//! the page reflects confirmed server state. A failed mutation emits a
//! failure toast, logs the raw error, and leaves all state unchanged.

use crate::api::{ApiError, Backend};
use crate::cache::ListCache;
use crate::config::{Registry, ResourceDescriptor};
use crate::error::{AppError, ConfigError};
use crate::form::{FieldErrors, ResourceForm};
use crate::model::Resource;
use crate::notify::{Notifier, Toast};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<R> {
    Idle,
    Loading,
    Ready(Vec<R>),
    Error(String),
}

#[derive(Clone, Debug)]
pub enum ModalState {
    Closed,
    Create(ResourceForm),
    Edit { id: Uuid, form: ResourceForm },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// Asked before a delete request is issued. Declining means no request.
pub trait ConfirmDelete {
    fn confirm(&self, descriptor: &ResourceDescriptor, id: Uuid) -> bool;
}

pub struct AlwaysConfirm;

impl ConfirmDelete for AlwaysConfirm {
    fn confirm(&self, _descriptor: &ResourceDescriptor, _id: Uuid) -> bool {
        true
    }
}

pub struct NeverConfirm;

impl ConfirmDelete for NeverConfirm {
    fn confirm(&self, _descriptor: &ResourceDescriptor, _id: Uuid) -> bool {
        false
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no form is open")]
    NotOpen,
    #[error("{0}")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct ResourcePage<R: Resource> {
    descriptor: ResourceDescriptor,
    backend: Arc<dyn Backend>,
    cache: Arc<ListCache>,
    notifier: Arc<dyn Notifier>,
    filters: Vec<(String, String)>,
    load: LoadState<R>,
    modal: ModalState,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(
        registry: &Registry,
        backend: Arc<dyn Backend>,
        cache: Arc<ListCache>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, AppError> {
        let descriptor = registry
            .descriptor(R::KIND)
            .ok_or_else(|| ConfigError::UnknownKind(R::KIND.to_string()))?
            .clone();
        Ok(Self {
            descriptor,
            backend,
            cache,
            notifier,
            filters: Vec::new(),
            load: LoadState::Idle,
            modal: ModalState::Closed,
        })
    }

    /// Narrow the list query by a `field=value` filter, e.g. project
    /// features scoped to one project. Scoped pages fetch directly instead
    /// of going through the shared per-kind cache.
    pub fn scoped(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> &LoadState<R> {
        &self.load
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Rows of the last successful load; empty unless the page is ready.
    pub fn rows(&self) -> &[R] {
        match &self.load {
            LoadState::Ready(rows) => rows,
            _ => &[],
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&R> {
        self.rows().iter().find(|record| record.id() == id)
    }

    /// Fetch the list (through the shared cache for unscoped pages) and move
    /// to ready or error.
    pub async fn load(&mut self) -> Result<(), AppError> {
        self.load = LoadState::Loading;
        match self.fetch_rows().await {
            Ok(rows) => {
                self.load = LoadState::Ready(rows);
                Ok(())
            }
            Err(e) => {
                tracing::error!(kind = %self.descriptor.kind, error = %e, "list fetch failed");
                self.load = LoadState::Error(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_rows(&self) -> Result<Vec<R>, AppError> {
        let raw: Vec<Value> = if self.filters.is_empty() {
            match self.cache.get(R::KIND).await {
                Some(cached) => (*cached).clone(),
                None => {
                    let fresh = self.backend.list(&self.descriptor, &[]).await?;
                    self.cache.put(R::KIND, fresh.clone()).await;
                    fresh
                }
            }
        } else {
            self.backend.list(&self.descriptor, &self.filters).await?
        };
        raw.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| AppError::Decode(e.to_string())))
            .collect()
    }

    /// Open the modal with a blank create form.
    pub fn open_create(&mut self) {
        self.modal = ModalState::Create(ResourceForm::blank(&self.descriptor));
    }

    /// Open the modal with a form seeded from the selected record. The
    /// record must be present in the loaded rows.
    pub fn open_edit(&mut self, id: Uuid) -> Result<(), AppError> {
        let record = self
            .find(id)
            .ok_or_else(|| AppError::NotFound(format!("{} {}", self.descriptor.kind, id)))?;
        let value =
            serde_json::to_value(record).map_err(|e| AppError::Decode(e.to_string()))?;
        let form = ResourceForm::seeded(&self.descriptor, &value)?;
        self.modal = ModalState::Edit { id, form };
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// The open form, for setting field values.
    pub fn form_mut(&mut self) -> Option<&mut ResourceForm> {
        match &mut self.modal {
            ModalState::Create(form) | ModalState::Edit { form, .. } => Some(form),
            ModalState::Closed => None,
        }
    }

    /// Validate the open form and route to create or update depending on
    /// whether a record is selected. Validation failures block submission
    /// without touching the network or the form.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let (body, selected) = match &self.modal {
            ModalState::Closed => return Err(SubmitError::NotOpen),
            ModalState::Create(form) => (form.submit().map_err(SubmitError::Invalid)?, None),
            ModalState::Edit { id, form } => {
                (form.submit().map_err(SubmitError::Invalid)?, Some(*id))
            }
        };
        let (past, infinitive) = match selected {
            Some(_) => ("updated", "update"),
            None => ("created", "create"),
        };
        let result = match selected {
            Some(id) => self.backend.update(&self.descriptor, id, &body).await,
            None => self.backend.create(&self.descriptor, &body).await,
        };
        match result {
            Ok(_) => {
                self.cache.invalidate(R::KIND).await;
                self.notifier.notify(Toast::success(format!(
                    "{} {past} successfully",
                    self.descriptor.title_name()
                )));
                self.modal = ModalState::Closed;
                self.reload_after_mutation().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(kind = %self.descriptor.kind, error = %e, "{infinitive} failed");
                self.notifier.notify(Toast::error(format!(
                    "Failed to {infinitive} {}",
                    self.descriptor.display_name()
                )));
                Err(SubmitError::Api(e))
            }
        }
    }

    /// Confirmation-gated delete. Returns false (and issues nothing) when
    /// the confirmation is declined.
    pub async fn delete(
        &mut self,
        id: Uuid,
        confirm: &dyn ConfirmDelete,
    ) -> Result<bool, AppError> {
        if !confirm.confirm(&self.descriptor, id) {
            return Ok(false);
        }
        match self.backend.delete(&self.descriptor, id).await {
            Ok(()) => {
                self.cache.invalidate(R::KIND).await;
                self.notifier.notify(Toast::success(format!(
                    "{} deleted successfully",
                    self.descriptor.title_name()
                )));
                self.reload_after_mutation().await;
                Ok(true)
            }
            Err(e) => {
                tracing::error!(kind = %self.descriptor.kind, error = %e, "delete failed");
                self.notifier.notify(Toast::error(format!(
                    "Failed to delete {}",
                    self.descriptor.display_name()
                )));
                Err(AppError::Api(e))
            }
        }
    }

    /// The mutation already succeeded; a failed refetch only leaves the page
    /// in the error state it reports itself.
    async fn reload_after_mutation(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!(kind = %self.descriptor.kind, error = %e, "reload after mutation failed");
        }
    }
}
