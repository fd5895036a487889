//! Folio Admin SDK: configuration-driven client for the portfolio dashboard
//! REST API.
//!
//! One generic page/form pair, parameterized by per-resource configuration
//! (field schemas, validation rules, endpoint paths), replaces the eight
//! hand-written dashboard pages. Pages fetch through a shared per-kind list
//! cache, mutate over a pluggable backend, and surface results as toasts.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod notify;
pub mod page;
pub mod table;

pub use api::{ApiError, Backend, ClientConfig, MemoryBackend, RestBackend, DEFAULT_BASE_URL};
pub use cache::ListCache;
pub use config::{FieldSpec, FieldType, Registry, ResourceDescriptor, ResourceKind};
pub use error::{AppError, ConfigError};
pub use form::{FieldError, FieldErrors, FormValue, ResourceForm};
pub use model::{
    About, Blog, Education, Project, ProjectCredential, ProjectFeature, Resource, Skill,
    SkillCategory, SkillDomain,
};
pub use notify::{MemoryNotifier, Notifier, Toast, ToastLevel, TracingNotifier};
pub use page::{
    AlwaysConfirm, ConfirmDelete, LoadState, ModalState, NeverConfirm, ResourcePage, SubmitError,
};
pub use table::render_table;
