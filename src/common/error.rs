use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a notification or generating its payload.
///
/// Every error is synchronous and raised at the offending call; the builder
/// is left unchanged, so a caller may recover by simply not repeating the
/// rejected mutation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PushError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Already set: {0}")]
    AlreadySet(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Missing field: {0}")]
    MissingField(String),
}

impl PushError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn already_set(message: impl Into<String>) -> Self {
        Self::AlreadySet(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::DuplicateKey(message.into())
    }

    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }

    pub fn code(&self) -> &str {
        match self {
            PushError::InvalidArgument(_) => "P_INVALID_ARGUMENT",
            PushError::AlreadySet(_) => "P_ALREADY_SET",
            PushError::InvalidState(_) => "P_INVALID_STATE",
            PushError::OutOfRange(_) => "P_OUT_OF_RANGE",
            PushError::DuplicateKey(_) => "P_DUPLICATE_KEY",
            PushError::MissingField(_) => "P_MISSING_FIELD",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PushError::InvalidArgument(msg)
            | PushError::AlreadySet(msg)
            | PushError::InvalidState(msg)
            | PushError::OutOfRange(msg)
            | PushError::DuplicateKey(msg)
            | PushError::MissingField(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for PushError {
    fn from(err: serde_json::Error) -> Self {
        PushError::InvalidArgument(err.to_string())
    }
}

pub type PayloadResult<T> = Result<T, PushError>;
