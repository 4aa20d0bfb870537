// src/handlers/blogs.rs
// DOCUMENTATION: HTTP handlers for reviews, exposed under /blogs
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ReviewsError;
use crate::models::CreateReviewRequest;
use crate::services::ReviewService;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// GET /blogs
/// List every review
pub async fn list_blogs(state: web::Data<AppState>) -> Result<impl Responder, ReviewsError> {
    let reviews = ReviewService::list_reviews(state.pool()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /blogs/{student_id}
/// List the reviews written about one student
pub async fn list_student_blogs(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<impl Responder, ReviewsError> {
    let reviews = ReviewService::list_reviews_for_student(state.pool(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

/// POST /blogs/{student_id}
/// Create a review owned by the student in the path
pub async fn create_blog(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<CreateReviewRequest>,
) -> Result<impl Responder, ReviewsError> {
    if let Err(e) = req.validate() {
        return Err(ReviewsError::ValidationError(e.to_string()));
    }

    let review =
        ReviewService::create_review(state.pool(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(review))
}

/// Configuration for review routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blogs")
            .route("", web::get().to(list_blogs))
            .route("/{student_id}", web::get().to(list_student_blogs))
            .route("/{student_id}", web::post().to(create_blog)),
    );
}
