// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service and database status

use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let database = match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => "ok",
        Err(e) => {
            log::error!("Health check database probe failed: {}", e);
            "unavailable"
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "student-reviews",
        "environment": state.config().environment,
        "database": database,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_health_check() {
        let state = AppState::for_tests().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");
        assert_eq!(body["service"], "student-reviews");
    }
}
