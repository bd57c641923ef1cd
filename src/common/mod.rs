// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod migrations;
pub mod response;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::ApiError;
pub use response::StatusResponse;
pub use state::AppState;
pub use validation::{ValidationResult, Validator};
