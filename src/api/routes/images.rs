use actix_web::{post, HttpResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::{api::extract::ValidatedJson, models::Image, utils::error::AppResult};

/// Liste d'images reçue directement comme corps JSON
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageBatch(pub Vec<Image>);

impl Validate for ImageBatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let failures: BTreeMap<usize, Box<ValidationErrors>> = self
            .0
            .iter()
            .enumerate()
            .filter_map(|(index, image)| image.validate().err().map(|e| (index, Box::new(e))))
            .collect();

        if failures.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        errors
            .errors_mut()
            .insert("images".into(), ValidationErrorsKind::List(failures));
        Err(errors)
    }
}

#[post("/images/multiple")]
pub async fn create_multiple_images(body: ValidatedJson<ImageBatch>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(body.into_inner()))
}

#[cfg(test)]
mod tests {
    use crate::api;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_images_echoed_in_order() {
        let app = test::init_service(App::new().configure(api::config)).await;
        let images = json!([
            {"url": "http://example.com/b.png", "name": "b"},
            {"url": "https://example.com/a.png", "name": "a"}
        ]);

        let req = test::TestRequest::post()
            .uri("/images/multiple")
            .set_json(&images)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, images);
    }

    #[actix_web::test]
    async fn test_invalid_image_url() {
        let app = test::init_service(App::new().configure(api::config)).await;

        let req = test::TestRequest::post()
            .uri("/images/multiple")
            .set_json(json!([
                {"url": "http://example.com/ok.png", "name": "ok"},
                {"url": "example.com/ko.png", "name": "ko"}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["details"][0]["loc"], json!(["body", "images", "1", "url"]));
        assert_eq!(body["details"][0]["type"], "url");
    }

    #[actix_web::test]
    async fn test_body_must_be_a_list() {
        let app = test::init_service(App::new().configure(api::config)).await;

        let req = test::TestRequest::post()
            .uri("/images/multiple")
            .set_json(json!({"url": "http://example.com/a.png", "name": "a"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
