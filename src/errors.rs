// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure is either a missing record, a rejected request
/// body, or a storage failure (constraint violations included)
#[derive(Error, Debug)]
pub enum ReviewsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ReviewsError {
    fn error_code(&self) -> &'static str {
        match self {
            ReviewsError::NotFound(_) => "NOT_FOUND",
            ReviewsError::DatabaseError(_) => "DATABASE_ERROR",
            ReviewsError::InvalidInput(_) => "INVALID_INPUT",
            ReviewsError::ValidationError(_) => "VALIDATION_ERROR",
        }
    }
}

/// Convert ReviewsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for ReviewsError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ReviewsError::NotFound(_) => StatusCode::NOT_FOUND,
            ReviewsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReviewsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ReviewsError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ReviewsError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ReviewsError::DatabaseError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ReviewsError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReviewsError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_rt::test]
    async fn test_error_body_envelope() {
        let resp = ReviewsError::NotFound("Student 'Neville'".into()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Not found: Student 'Neville'");
        assert!(body["error"]["timestamp"].is_string());
    }
}
