//! Request pipeline layers.
//!
//! Order from the outside in: request logging, CORS guard, CORS headers,
//! exception filter, panic containment, then the router.

pub mod cors;
pub mod error_handling;
pub mod interceptor;
pub mod metrics;

pub use cors::{cors_guard, create_cors_layer, CorsError, CorsOriginPolicy};
pub use error_handling::{create_exception_filter, ErrorUtils, ExceptionFilterLayer};
pub use interceptor::ResponseInterceptor;
