// src/lib.rs
// Modules principaux
pub mod api;
pub mod models;
pub mod utils;

// Ré-exports pour faciliter l'utilisation
pub use models::*;
pub use utils::{AppError, AppResult, Config};

// Version de l'application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "Items API";
