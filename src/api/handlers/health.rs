use axum::extract::State;
use serde_json::json;
use utoipa::OpenApi;

use crate::api::errors::ApiResult;
use crate::api::openapi::ApiDoc;
use crate::api::router::AppState;
use crate::domain::ApiResponse;

const DOCS_HINT: &str =
    "Lost? \"/docs\" - read them like your job depends on it (because it does).";

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Welcome message", body = ApiResponse)
    )
)]
pub async fn welcome_handler() -> ApiResult {
    Ok(ApiResponse::ok()
        .with_message("Welcome to the API House!")
        .with_data(json!({
            "key": "Bearer <YOU_CAN_LIVE_HERE_IF_YOU_HAVE_A_KEY>",
            "health": "Worried if HOME is sanitized? Check \"/health\" for a vibe check.",
            "docs": DOCS_HINT,
            "rules": ["Need a key? Visit \"/api/auth/login\""],
            "timestamp": timestamp(),
        })))
}

/// GET /health
/// Liveness check, no collaborator is contacted
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = ApiResponse)
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> ApiResult {
    Ok(ApiResponse::ok()
        .with_message("YES, yes... API is healthy! Stop pinging every minute.")
        .with_data(json!({
            "alive": state.started_at.elapsed().as_secs(),
            "mode": state.config.mode.as_str(),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": timestamp(),
        })))
}

/// GET /docs
/// Serves the OpenAPI document inside the envelope
#[utoipa::path(
    get,
    path = "/docs",
    tag = "home",
    responses(
        (status = 200, description = "OpenAPI document", body = ApiResponse),
        (status = 500, description = "Document could not be rendered", body = ApiResponse)
    )
)]
pub async fn docs_handler() -> ApiResult {
    let openapi = serde_json::to_value(ApiDoc::openapi())?;

    Ok(ApiResponse::ok().with_message(DOCS_HINT).with_data(json!({
        "openapi": openapi,
        "timestamp": timestamp(),
    })))
}
