//! The uniform response body.
//!
//! Every response, success or failure, carries the same four fields on the
//! wire:
//!
//! ```json
//! { "success": true, "statusCode": 200, "message": "Operation Successful.", "data": {} }
//! ```
//!
//! `data` only ever appears on success.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::errors::{ClassifiedError, GENERIC_ERROR_MESSAGE};

/// Message used when a handler does not supply one
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Operation Successful.";

/// Response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    /// HTTP status mirrored on the status line
    #[schema(example = 200)]
    pub status_code: u16,
    #[schema(example = "Operation Successful.")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Success envelope with every default applied
    pub fn ok() -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            data: None,
        }
    }

    /// Success envelope from its optional parts
    pub fn success(message: Option<&str>, status: Option<StatusCode>, data: Option<Value>) -> Self {
        let mut envelope = Self::ok();
        if let Some(message) = message {
            envelope = envelope.with_message(message);
        }
        if let Some(status) = status {
            envelope = envelope.with_status(status);
        }
        envelope.data = data;
        envelope
    }

    /// Error envelope for a classified failure. Never carries `data`.
    pub fn failure(error: &ClassifiedError) -> Self {
        let message = if error.message.is_empty() {
            error
                .status
                .canonical_reason()
                .unwrap_or(GENERIC_ERROR_MESSAGE)
                .to_string()
        } else {
            error.message.clone()
        };

        Self {
            success: false,
            status_code: error.status.as_u16(),
            message,
            data: None,
        }
    }

    /// Replace the message; an empty message keeps the current one
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = status.as_u16();
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl Default for ApiResponse {
    fn default() -> Self {
        Self::ok()
    }
}
