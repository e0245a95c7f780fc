use actix_web::{post, HttpResponse};

use crate::{api::extract::ValidatedJson, models::Offer, utils::error::AppResult};

#[post("/offers/")]
pub async fn create_offer(body: ValidatedJson<Offer>) -> AppResult<HttpResponse> {
    let offer = body.into_inner();
    tracing::debug!(name = %offer.name, items = offer.items.len(), "create_offer");

    Ok(HttpResponse::Ok().json(offer))
}
