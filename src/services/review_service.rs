// src/services/review_service.rs
// DOCUMENTATION: Business logic for reviews ("blogs")

use crate::db::ReviewRepository;
use crate::errors::ReviewsError;
use crate::models::{CreateReviewRequest, Review};
use sqlx::SqlitePool;

pub struct ReviewService;

impl ReviewService {
    pub async fn list_reviews(pool: &SqlitePool) -> Result<Vec<Review>, ReviewsError> {
        ReviewRepository::list_all(pool).await
    }

    pub async fn list_reviews_for_student(
        pool: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Review>, ReviewsError> {
        ReviewRepository::get_reviews_by_student(pool, student_id).await
    }

    /// Create a review owned by `student_id`
    /// DOCUMENTATION: The path id overrides anything sent in the body
    pub async fn create_review(
        pool: &SqlitePool,
        student_id: i64,
        req: CreateReviewRequest,
    ) -> Result<Review, ReviewsError> {
        if let Some(body_id) = req.student_id.filter(|id| *id != student_id) {
            log::debug!(
                "Ignoring body student_id {} in favour of path id {}",
                body_id,
                student_id
            );
        }

        ReviewRepository::create_review(pool, &req.into_new_review(student_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_demo_data, test_pool};

    #[tokio::test]
    async fn test_create_review_for_student_three() {
        let pool = test_pool().await;
        seed_demo_data(&pool).await.unwrap();

        let before = ReviewService::list_reviews_for_student(&pool, 3)
            .await
            .unwrap();
        assert_eq!(before.len(), 1);

        let created = ReviewService::create_review(
            &pool,
            3,
            CreateReviewRequest {
                course: "Flying-201".to_string(),
                author: Some("Madam Hooch".to_string()),
                student_id: Some(1),
                participation: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(created.student_id, 3);
        assert_eq!(created.author, "Madam Hooch");

        let after = ReviewService::list_reviews_for_student(&pool, 3)
            .await
            .unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after.last(), Some(&created));
        assert_eq!(ReviewService::list_reviews(&pool).await.unwrap().len(), 9);
    }
}
