//! Classification of failures into a final status and message.
//!
//! A failure moves through four stages:
//!
//! 1. **Received**: a declared exception supplies a provisional status,
//!    anything else is provisionally 500.
//! 2. **Message resolved**: the failure is reduced to one message string.
//! 3. **Code extracted**: an embedded `"<status>:"` prefix overrides the
//!    provisional status and is removed from the message.
//! 4. **Emitted**: the result is rendered as an error envelope.
//!
//! Classification is a pure function of the failure; it holds no state
//! between calls and never panics.

use axum::http::StatusCode;

use super::normalizer::normalize_error_message;
use crate::domain::{ApiResponse, ClassifiedError, CodedMessage, RaisedError, DEFAULT_ERROR_STATUS};

/// Exception filter for raised errors
pub struct ExceptionFilter;

impl ExceptionFilter {
    /// Classify a failure into its final status and message
    pub fn classify(error: &RaisedError) -> ClassifiedError {
        let provisional = Self::provisional_status(error);
        let message = normalize_error_message(error);
        Self::extract_code(provisional, &message)
    }

    /// Classify a failure and build the error envelope for it
    pub fn envelope(error: &RaisedError) -> (ClassifiedError, ApiResponse) {
        let classified = Self::classify(error);
        let envelope = ApiResponse::failure(&classified);
        (classified, envelope)
    }

    fn provisional_status(error: &RaisedError) -> StatusCode {
        error.declared_status().unwrap_or(DEFAULT_ERROR_STATUS)
    }

    fn extract_code(provisional: StatusCode, message: &str) -> ClassifiedError {
        match CodedMessage::parse(message).into_parts() {
            (Some(status), text) => ClassifiedError::new(status, text),
            (None, text) => ClassifiedError::new(provisional, text),
        }
    }
}
