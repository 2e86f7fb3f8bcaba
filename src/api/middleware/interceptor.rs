use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response::write_envelope;
use crate::domain::ApiResponse;

/// Success-path finalizer: the status line follows the envelope's `statusCode`
pub struct ResponseInterceptor;

impl ResponseInterceptor {
    /// Status line for an envelope, 200 when the declared code is not a valid status
    pub fn status_for(envelope: &ApiResponse) -> StatusCode {
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::OK)
    }

    pub fn intercept(envelope: ApiResponse) -> Response {
        let status = Self::status_for(&envelope);
        write_envelope(status, envelope)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        ResponseInterceptor::intercept(self)
    }
}
