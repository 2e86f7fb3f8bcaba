use axum::http::{Method, StatusCode, Uri};

use crate::api::errors::ApiError;
use crate::domain::CodedMessage;

/// Unmatched route
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    // Paths may contain colons, so the status is encoded explicitly
    let text = format!("Cannot {} {}", method, uri.path());
    ApiError::message(CodedMessage::coded(StatusCode::NOT_FOUND, text).to_string())
}

/// Route exists but not for this method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
