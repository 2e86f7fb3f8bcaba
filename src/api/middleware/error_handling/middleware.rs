use axum::{
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::api::response::is_enveloped;
use crate::domain::{CodedMessage, GENERIC_ERROR_MESSAGE};

/// Largest stray error body read back when converting it to an envelope
const MAX_STRAY_BODY_BYTES: usize = 64 * 1024;

/// Terminal catch-all for error responses that bypassed the envelope
/// pipeline (extractor rejections, body limits, method mismatches).
#[derive(Clone)]
pub struct ExceptionFilterLayer;

impl<S> tower::Layer<S> for ExceptionFilterLayer
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Service = ExceptionFilterService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ExceptionFilterService { inner }
    }
}

/// Exception filter service wrapper
#[derive(Clone)]
pub struct ExceptionFilterService<S> {
    inner: S,
}

impl<S> tower::Service<Request> for ExceptionFilterService<S>
where
    S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    S::Response: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let uri = req.uri().clone();
            let method = req.method().clone();

            let response = inner.call(req).await?;

            if !needs_envelope(&response) {
                return Ok(response);
            }

            debug!(method = %method, uri = %uri, status = %response.status(), "enveloping_stray_error");
            Ok(Self::envelope_stray_error(response).await)
        })
    }
}

impl<S> ExceptionFilterService<S> {
    /// Re-raise a stray error response through the exception filter. The
    /// original status travels as an embedded code so the body text, colons
    /// included, survives as the message.
    async fn envelope_stray_error(response: Response) -> Response {
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), MAX_STRAY_BODY_BYTES)
            .await
            .ok()
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        let text = body.unwrap_or_else(|| canonical_text(status));
        ApiError::message(CodedMessage::coded(status, text).to_string()).into_response()
    }
}

fn needs_envelope(response: &Response) -> bool {
    let status = response.status();
    (status.is_client_error() || status.is_server_error()) && !is_enveloped(response)
}

fn canonical_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_string()
}

/// Create the exception filter layer
pub fn create_exception_filter() -> ExceptionFilterLayer {
    ExceptionFilterLayer
}
