use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{models::ModelName, utils::error::AppResult};

#[derive(Debug, Deserialize)]
pub struct ModelPath {
    pub model_name: ModelName,
}

/// Réponse: le modèle demandé et son message
#[derive(Debug, Serialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: &'static str,
}

#[get("/models/{model_name}")]
pub async fn get_model(path: web::Path<ModelPath>) -> AppResult<HttpResponse> {
    let model_name = path.into_inner().model_name;

    Ok(HttpResponse::Ok().json(ModelResponse {
        model_name,
        message: model_name.message(),
    }))
}
