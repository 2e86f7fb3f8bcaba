use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::ApiResponse;

/// Response extension marking a body that is already an envelope
#[derive(Debug, Clone, Copy)]
pub struct Enveloped;

/// Serialize an envelope with the given status line
pub(crate) fn write_envelope(status: StatusCode, envelope: ApiResponse) -> Response {
    let mut response = (status, Json(envelope)).into_response();
    response.extensions_mut().insert(Enveloped);
    response
}

/// Whether the response body is an envelope written by this crate
pub fn is_enveloped(response: &Response) -> bool {
    response.extensions().get::<Enveloped>().is_some()
}
