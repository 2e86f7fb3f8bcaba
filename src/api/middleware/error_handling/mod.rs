//! Failure-path boundary of the request pipeline.
//!
//! - middleware.rs: catch-all layer enveloping error responses produced
//!   outside the handlers (extractor rejections, method mismatches)
//! - utils.rs: failure logging and panic rendering

pub mod middleware;
pub mod utils;

pub use middleware::{create_exception_filter, ExceptionFilterLayer};
pub use utils::ErrorUtils;
