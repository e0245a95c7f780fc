use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::utils::{coerce, error::AppResult};

/// Poids indexés par entier. Les clés JSON sont des chaînes converties en `i64`,
/// les valeurs peuvent être des nombres ou des chaînes numériques
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexWeights(#[serde(deserialize_with = "coerce::float_map")] pub BTreeMap<i64, f64>);

#[post("/index-weights/")]
pub async fn create_index_weights(weights: web::Json<IndexWeights>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(weights.into_inner()))
}
