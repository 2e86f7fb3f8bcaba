pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod router;

pub use errors::{ApiError, ApiResult};
pub use router::{create_router, AppState};
