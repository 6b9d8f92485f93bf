//! Core error type.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
}

/// Shorthand result type for `ba-core`.
pub type CoreResult<T> = Result<T, CoreError>;
