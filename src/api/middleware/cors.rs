use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::{Config, EnvMode};

/// Raised before routing when a browser origin is not on the guest list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorsError {
    #[error("CORS: Nice try, but nope. You are not in our guest list.")]
    OriginNotAllowed { origin: String },
}

impl IntoResponse for CorsError {
    fn into_response(self) -> Response {
        // Rejected before routing, so not an envelope
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (StatusCode::FORBIDDEN, body).into_response()
    }
}

/// Origin admission policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOriginPolicy {
    mode: EnvMode,
    allowed_origins: Vec<String>,
}

impl CorsOriginPolicy {
    pub fn new(mode: EnvMode, allowed_origins: Vec<String>) -> Self {
        Self {
            mode,
            allowed_origins,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mode, config.cors_allowed_origins.clone())
    }

    /// Decide whether a request with the given `Origin` header may proceed.
    ///
    /// Requests without an origin (same-origin, non-browser clients) and
    /// every request in development mode are allowed. Otherwise the origin
    /// must appear verbatim in the allow-list.
    pub fn allow(&self, origin: Option<&str>) -> Result<(), CorsError> {
        let Some(origin) = origin else {
            return Ok(());
        };

        if self.mode.is_development() || self.allowed_origins.iter().any(|o| o == origin) {
            return Ok(());
        }

        Err(CorsError::OriginNotAllowed {
            origin: origin.to_string(),
        })
    }

    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        self.allow(origin).is_ok()
    }
}

fn origin_header(value: &HeaderValue) -> &str {
    // A non-UTF-8 origin can never match the allow-list
    value.to_str().unwrap_or_default()
}

/// Reject requests from disallowed origins before they reach any handler
pub async fn cors_guard(
    State(policy): State<Arc<CorsOriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).map(origin_header);

    if let Err(err) = policy.allow(origin) {
        if let CorsError::OriginNotAllowed { origin } = &err {
            warn!(origin = %origin, method = %request.method(), uri = %request.uri(), "cors_origin_rejected");
        }
        return err.into_response();
    }

    next.run(request).await
}

/// CORS response headers driven by the same policy as the guard
pub fn create_cors_layer(policy: Arc<CorsOriginPolicy>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _parts| {
            policy.is_allowed(Some(origin_header(origin)))
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
