use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message used whenever nothing better can be extracted from a failure
pub const GENERIC_ERROR_MESSAGE: &str = "Exception, Some error occured!";

/// A failure that declares its own HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpException {
    pub status: StatusCode,
    pub message: String,
}

impl HttpException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Any value a handler or collaborator may fail with
#[derive(Debug, Clone, PartialEq)]
pub enum RaisedError {
    /// Free text, possibly carrying an embedded `"<status>:"` prefix
    Message(String),
    /// A declared exception with its own status
    Http(HttpException),
    /// A loosely shaped object from an upstream integration (driver errors,
    /// remote error bodies). Arbitrary JSON.
    Object(Value),
}

impl RaisedError {
    /// Status declared by the failure itself, before any message decoding
    pub fn declared_status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(exception) => Some(exception.status),
            Self::Message(_) | Self::Object(_) => None,
        }
    }
}

impl From<String> for RaisedError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for RaisedError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<HttpException> for RaisedError {
    fn from(exception: HttpException) -> Self {
        Self::Http(exception)
    }
}

impl From<Value> for RaisedError {
    fn from(value: Value) -> Self {
        Self::Object(value)
    }
}

/// Final outcome of classifying a failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub status: StatusCode,
    /// User-visible text; the embedded status prefix has been removed
    pub message: String,
}

impl ClassifiedError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The last-resort outcome when nothing about a failure can be trusted
    pub fn generic() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
    }
}
