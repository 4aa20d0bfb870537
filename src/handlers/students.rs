// src/handlers/students.rs
// DOCUMENTATION: HTTP handlers for student operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::ReviewsError;
use crate::models::CreateStudentRequest;
use crate::services::StudentService;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// GET /students
/// List every student with name, email and average rating
pub async fn list_students(state: web::Data<AppState>) -> Result<impl Responder, ReviewsError> {
    let students = StudentService::list_students(state.pool()).await?;
    Ok(HttpResponse::Ok().json(students))
}

/// POST /students
/// Create a new student
pub async fn create_student(
    state: web::Data<AppState>,
    req: web::Json<CreateStudentRequest>,
) -> Result<impl Responder, ReviewsError> {
    if let Err(e) = req.validate() {
        return Err(ReviewsError::ValidationError(e.to_string()));
    }

    let student = StudentService::create_student(state.pool(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

/// GET /students/{name}
/// Retrieve a student and its reviews by exact name
pub async fn get_student(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, ReviewsError> {
    let name = path.into_inner();
    let student = StudentService::get_student(state.pool(), &name).await?;
    Ok(HttpResponse::Ok().json(student))
}

/// DELETE /students/{name}
/// Delete a student and its reviews
pub async fn delete_student(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<impl Responder, ReviewsError> {
    let name = path.into_inner();
    StudentService::delete_student(state.pool(), &name).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Success!" })))
}

/// Configuration for student routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{name}", web::get().to(get_student))
            .route("/{name}", web::delete().to(delete_student)),
    );
}
