use axum::{middleware as axum_middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::handlers::{
    docs_handler, health_handler, method_not_allowed_handler, not_found_handler, welcome_handler,
};
use crate::api::middleware::{
    cors, create_cors_layer, create_exception_filter, metrics, CorsOriginPolicy, ErrorUtils,
};
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let policy = Arc::new(CorsOriginPolicy::from_config(&state.config));

    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
        .route("/docs", get(docs_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        // Layers run outermost-last: panics are contained inside the exception filter
        .layer(CatchPanicLayer::custom(ErrorUtils::panic_response))
        .layer(create_exception_filter())
        .layer(create_cors_layer(Arc::clone(&policy)))
        .layer(axum_middleware::from_fn_with_state(policy, cors::cors_guard))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}
