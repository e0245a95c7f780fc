pub mod extract;
pub mod routes;

use actix_web::web;

use crate::utils::Config;

/// Configure toutes les routes de l'API
pub fn config(cfg: &mut web::ServiceConfig) {
    // Erreurs d'extraction → 422 structuré
    cfg.app_data(extract::json_config())
        .app_data(extract::query_config())
        .app_data(extract::path_config());

    cfg.service(routes::root::root)
        // Items
        .service(routes::items::create_item)
        .service(routes::items::search_items)
        .service(routes::items::update_item)
        .service(routes::items::read_item)
        .service(routes::items::update_embedded_item)
        .service(routes::items::read_item_query)
        // Modèles
        .service(routes::models::get_model)
        // Offres, images, poids
        .service(routes::offers::create_offer)
        .service(routes::images::create_multiple_images)
        .service(routes::weights::create_index_weights);

    // Endpoint de santé
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}

/// Endpoint de santé pour monitoring. Requiert `web::Data<Config>` dans l'App
async fn health_check(config: web::Data<Config>) -> impl actix_web::Responder {
    actix_web::HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": config.run_mode,
        "production": config.is_production()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let settings = Config::from_source(|_| None).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["environment"], "development");
        assert_eq!(body["production"], false);
    }

    #[actix_web::test]
    async fn test_health_check_reports_configured_mode() {
        let settings = Config::from_source(|key| match key {
            "RUN_MODE" => Some("production".to_string()),
            _ => None,
        })
        .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["environment"], "production");
        assert_eq!(body["production"], true);
    }
}
