pub mod fallback;
pub mod health;

#[cfg(test)]
mod tests;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::{docs_handler, health_handler, welcome_handler};
