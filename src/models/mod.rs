// Modèle: item.rs
pub mod item;
pub use item::{Image, Item, ItemWithTax, Offer};

// Modèle: user.rs
pub mod user;
pub use user::User;

// Modèle: model_name.rs
pub mod model_name;
pub use model_name::ModelName;

use serde::{Deserialize, Serialize};

/// Réponse de bienvenue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
