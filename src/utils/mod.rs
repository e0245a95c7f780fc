// utils/mod.rs
pub mod coerce;
pub mod config;
pub mod error;
pub mod validation;

// Ré-exports pour faciliter l'import
pub use config::Config;
pub use error::{AppError, AppResult, ErrorResponse, FieldViolation, RequestPart};
pub use validation::validate_http_url;
