use serde::{Deserialize, Serialize};
use validator::Validate;

/// Utilisateur à l'origine d'une mise à jour d'item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub username: String,

    #[serde(default)]
    pub full_name: Option<String>,
}
