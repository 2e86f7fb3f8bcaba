//! # API House - uniform response envelopes
//!
//! A small HTTP service in which every outcome, success or failure, from any
//! layer, leaves the process in the same JSON envelope.
//!
//! ## Architecture Layers
//!
//! - **Domain**: the envelope, the raised-error taxonomy and the embedded
//!   status-code convention
//! - **Application**: error message normalization and classification
//! - **API**: HTTP handlers and the middleware pipeline (CORS, exception
//!   filter, response interceptor, request logging)
//!
//! ## Example Usage
//!
//! ```no_run
//! use api_house::{api::ApiError, domain::ApiResponse};
//!
//! async fn find_user(id: &str) -> Result<ApiResponse, ApiError> {
//!     if id.is_empty() {
//!         // Reported as 404 with the message "User not found"
//!         return Err(ApiError::message("404:User not found"));
//!     }
//!     Ok(ApiResponse::ok().with_data(serde_json::json!({ "id": id })))
//! }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;

pub use api::errors as api_errors;
pub use application::ExceptionFilter;
pub use config::Config;
pub use domain::{ApiResponse, RaisedError};
