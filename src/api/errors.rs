use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::middleware::error_handling::ErrorUtils;
use crate::api::response::write_envelope;
use crate::application::ExceptionFilter;
use crate::domain::{ApiResponse, HttpException, RaisedError};

/// Result type returned by route handlers
pub type ApiResult = Result<ApiResponse, ApiError>;

/// Failure raised by a route handler.
///
/// Wraps whatever the handler failed with; classification happens only when
/// the error is turned into a response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    raised: RaisedError,
}

impl ApiError {
    /// Declared exception with an explicit status
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            raised: RaisedError::Http(HttpException::new(status, message)),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Free-text failure, e.g. `"404:User not found"`
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            raised: RaisedError::Message(message.into()),
        }
    }

    /// Failure object reported by an upstream integration
    pub fn upstream(value: Value) -> Self {
        Self {
            raised: RaisedError::Object(value),
        }
    }

    pub fn raised(&self) -> &RaisedError {
        &self.raised
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (classified, envelope) = ExceptionFilter::envelope(&self.raised);
        ErrorUtils::log_classified(&classified);
        write_envelope(classified.status, envelope)
    }
}

impl From<RaisedError> for ApiError {
    fn from(raised: RaisedError) -> Self {
        Self { raised }
    }
}

impl From<HttpException> for ApiError {
    fn from(exception: HttpException) -> Self {
        Self::from(RaisedError::from(exception))
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<Value> for ApiError {
    fn from(value: Value) -> Self {
        Self::upstream(value)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        // Serde messages contain colons and would be misread as coded messages
        tracing::error!(error = %err, "Response serialization failed");
        Self::internal_error("Serialization failed")
    }
}
