pub mod classifier;
pub mod normalizer;

pub use classifier::ExceptionFilter;
pub use normalizer::{normalize_error_message, ErrorShape};
