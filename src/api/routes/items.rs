//! # Routes items
//!
//! - `POST /items/` : crée un item, ajoute `price_with_tax` si taxe
//! - `PUT  /items/{item_id}` : item + user + importance (corps multi-champs)
//! - `GET  /items/` : recherche (paramètre `q` déprécié, 3 caractères min)
//! - `PUT  /item2s/{item_id}` : item embarqué sous la clé `item`
//! - `GET  /items2/` : paramètre répété `item-query`
//! - `GET  /items/{item_id}` : lecture bornée (1 < id <= 1000, 0 < size < 10.5)

use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, warn};
use validator::Validate;

use crate::{
    api::extract::{query_values, ValidatedJson, ValidatedPath, ValidatedQuery},
    models::{Item, ItemWithTax, User},
    utils::error::AppResult,
};

/// Valeurs par défaut de `item-query` quand le paramètre est absent
const DEFAULT_ITEM_QUERY: [&str; 2] = ["foo", "bar"];

/// Corps de `PUT /items/{item_id}`: un champ par paramètre de corps
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateItemBody {
    #[validate(nested)]
    pub item: Item,

    #[validate(nested)]
    pub user: User,

    #[validate(range(exclusive_min = 0, message = "importance must be greater than zero"))]
    pub importance: i64,
}

/// Corps de `PUT /item2s/{item_id}`: l'item est embarqué sous la clé `item`
#[derive(Debug, Deserialize, Validate)]
pub struct EmbeddedItemBody {
    #[validate(nested)]
    pub item: Item,
}

/// Query de recherche. `q` est déprécié mais reste obligatoire
#[derive(Debug, Deserialize, Validate)]
pub struct SearchItemsQuery {
    #[validate(length(min = 3, message = "q must be at least 3 characters"))]
    pub q: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReadItemPath {
    #[validate(range(
        exclusive_min = 1,
        max = 1000,
        message = "item_id must be greater than 1 and at most 1000"
    ))]
    pub item_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReadItemQuery {
    pub q: String,

    #[validate(range(
        exclusive_min = 0.0,
        exclusive_max = 10.5,
        message = "size must be greater than 0 and less than 10.5"
    ))]
    pub size: f64,
}

#[derive(Debug, Serialize)]
pub struct ItemRef {
    pub item_id: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SearchItemsResponse {
    pub items: Vec<ItemRef>,
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct EmbeddedItemResponse {
    pub item_id: i64,
    pub item: Item,
}

#[derive(Debug, Serialize)]
pub struct ItemQueryResponse {
    pub q: Vec<String>,
}

#[post("/items/")]
pub async fn create_item(body: ValidatedJson<Item>) -> AppResult<HttpResponse> {
    let item = body.into_inner();
    debug!(name = %item.name, "create_item");

    Ok(HttpResponse::Ok().json(ItemWithTax::from(item)))
}

#[put("/items/{item_id}")]
pub async fn update_item(
    item_id: web::Path<i64>,
    body: ValidatedJson<UpdateItemBody>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let item_id = item_id.into_inner();
    let UpdateItemBody {
        item,
        user,
        importance,
    } = body.into_inner();

    let mut results = Map::new();
    results.insert("item_id".to_string(), json!(item_id));
    results.insert("item".to_string(), serde_json::to_value(item)?);
    results.insert("user".to_string(), serde_json::to_value(user)?);
    results.insert("importance".to_string(), json!(importance));

    // `q` répété: la dernière valeur l'emporte
    if let Some(q) = query_values(&req, "q").pop().filter(|q| !q.is_empty()) {
        results.insert("q".to_string(), Value::String(q));
    }

    Ok(HttpResponse::Ok().json(Value::Object(results)))
}

#[get("/items/")]
pub async fn search_items(query: ValidatedQuery<SearchItemsQuery>) -> AppResult<HttpResponse> {
    let SearchItemsQuery { q } = query.into_inner();
    warn!(q = %q, "deprecated query parameter `q` used on GET /items/");

    Ok(HttpResponse::Ok().json(SearchItemsResponse {
        items: vec![ItemRef { item_id: "Foo" }, ItemRef { item_id: "Bar" }],
        q,
    }))
}

#[put("/item2s/{item_id}")]
pub async fn update_embedded_item(
    item_id: web::Path<i64>,
    body: ValidatedJson<EmbeddedItemBody>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(EmbeddedItemResponse {
        item_id: item_id.into_inner(),
        item: body.into_inner().item,
    }))
}

#[get("/items2/")]
pub async fn read_item_query(req: HttpRequest) -> AppResult<HttpResponse> {
    let mut q = query_values(&req, "item-query");
    if q.is_empty() {
        q = DEFAULT_ITEM_QUERY.iter().map(|s| s.to_string()).collect();
    }

    Ok(HttpResponse::Ok().json(ItemQueryResponse { q }))
}

#[get("/items/{item_id}")]
pub async fn read_item(
    path: ValidatedPath<ReadItemPath>,
    query: ValidatedQuery<ReadItemQuery>,
) -> AppResult<HttpResponse> {
    let ReadItemQuery { q, size } = query.into_inner();
    debug!(item_id = path.item_id, size, "read_item");

    let mut results = Map::new();
    results.insert("item_id".to_string(), json!(path.item_id));
    if !q.is_empty() {
        results.insert("q".to_string(), Value::String(q));
    }

    Ok(HttpResponse::Ok().json(Value::Object(results)))
}
