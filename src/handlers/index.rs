// src/handlers/index.rs
// DOCUMENTATION: Landing page
// PURPOSE: Render templates/index.html with its background image

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const BG_FILE: &str = "blog_bg.jpg";

/// Fill the `{{ bg_file }}` placeholder
pub fn render_index(bg_file: &str) -> String {
    INDEX_TEMPLATE.replace("{{ bg_file }}", bg_file)
}

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(BG_FILE))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}
