//! Typed errors shared across the SDK.

use crate::api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown resource kind: {0}")]
    UnknownKind(String),
    #[error("duplicate path segment: {0}")]
    DuplicatePathSegment(String),
    #[error("missing reference: field '{field}' points at unregistered kind '{kind}'")]
    MissingReference { field: &'static str, kind: String },
    #[error("choice field '{0}' has no options")]
    EmptyChoice(&'static str),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("decode: {0}")]
    Decode(String),
}
