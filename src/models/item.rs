use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

use crate::utils::{coerce, validation::validate_http_url};

/// Image attachée à un item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Image {
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,

    pub name: String,
}

/// Item du catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    pub name: String,

    /// Description libre, 300 caractères maximum
    #[serde(default)]
    #[validate(length(max = 300, message = "description must be at most 300 characters"))]
    pub description: Option<String>,

    /// Le prix doit être strictement positif (nombre ou chaîne numérique)
    #[serde(deserialize_with = "coerce::float")]
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than zero"))]
    pub price: f64,

    #[serde(default, deserialize_with = "coerce::optional_float")]
    pub tax: Option<f64>,

    /// Ensemble de tags: les doublons sont fusionnés à la désérialisation
    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    #[validate(nested)]
    pub images: Option<Vec<Image>>,
}

impl Item {
    /// Prix TTC, uniquement si une taxe non nulle est renseignée
    pub fn price_with_tax(&self) -> Option<f64> {
        match self.tax {
            Some(tax) if tax != 0.0 => Some(self.price + tax),
            _ => None,
        }
    }
}

/// Réponse de création d'item: l'item complet plus le prix TTC éventuel
#[derive(Debug, Clone, Serialize)]
pub struct ItemWithTax {
    #[serde(flatten)]
    pub item: Item,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

impl From<Item> for ItemWithTax {
    fn from(item: Item) -> Self {
        let price_with_tax = item.price_with_tax();
        Self {
            item,
            price_with_tax,
        }
    }
}

/// Offre regroupant plusieurs items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Offer {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(deserialize_with = "coerce::float")]
    pub price: f64,

    #[validate(nested)]
    pub items: Vec<Item>,
}
