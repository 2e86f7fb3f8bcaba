use std::any::Any;

use axum::response::Response;
use tracing::{error, warn};

use crate::api::response::write_envelope;
use crate::domain::{ApiResponse, ClassifiedError};

/// Error handling utilities
pub struct ErrorUtils;

impl ErrorUtils {
    /// Log a classified failure at a level matching its status
    pub fn log_classified(classified: &ClassifiedError) {
        let status = classified.status;

        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                message = %classified.message,
                "request_failed"
            );
        } else if status.is_client_error() {
            warn!(
                status = status.as_u16(),
                message = %classified.message,
                "request_rejected"
            );
        }
    }

    /// Render a panicking handler as a generic 500 envelope.
    ///
    /// The panic payload is logged and never sent to the client.
    pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
        let detail = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("non-string panic payload");
        error!(panic = %detail, "handler_panicked");

        let classified = ClassifiedError::generic();
        write_envelope(classified.status, ApiResponse::failure(&classified))
    }
}
