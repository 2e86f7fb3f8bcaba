pub mod coded_message;
pub mod envelope;
pub mod errors;

pub use coded_message::{CodedMessage, DEFAULT_ERROR_STATUS};
pub use envelope::{ApiResponse, DEFAULT_SUCCESS_MESSAGE};
pub use errors::{ClassifiedError, HttpException, RaisedError, GENERIC_ERROR_MESSAGE};
