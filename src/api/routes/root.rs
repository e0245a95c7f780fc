use actix_web::{get, HttpResponse, Responder};

use crate::models::MessageResponse;

#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_root() {
        let app = test::init_service(App::new().configure(api::config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"message": "Hello World"}));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404() {
        let app = test::init_service(App::new().configure(api::config)).await;

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
