// src/db/review_repository.rs
// DOCUMENTATION: Review database operations
// PURPOSE: Handle create/list/delete for student reviews

use crate::errors::ReviewsError;
use crate::models::{NewReview, Review};
use sqlx::{SqliteConnection, SqlitePool};

pub struct ReviewRepository;

impl ReviewRepository {
    /// Create a new review
    /// DOCUMENTATION: Rating range and the student foreign key are enforced by the table
    pub async fn create_review(pool: &SqlitePool, new: &NewReview) -> Result<Review, ReviewsError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (
                course, author, student_id, review,
                intelligence, attendance, participation, sarcasm
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&new.course)
        .bind(&new.author)
        .bind(new.student_id)
        .bind(&new.review)
        .bind(new.intelligence)
        .bind(new.attendance)
        .bind(new.participation)
        .bind(new.sarcasm)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!(
                "Failed to create review for student {}: {}",
                new.student_id,
                e
            );
            ReviewsError::DatabaseError(format!("Create review failed: {}", e))
        })?;

        log::info!(
            "Created review {} for student {}",
            review.id,
            review.student_id
        );
        Ok(review)
    }

    /// List every review in id order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Review>, ReviewsError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list reviews: {}", e);
                ReviewsError::DatabaseError(format!("List reviews failed: {}", e))
            })
    }

    /// Get reviews for a student
    pub async fn get_reviews_by_student(
        pool: &SqlitePool,
        student_id: i64,
    ) -> Result<Vec<Review>, ReviewsError> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE student_id = ?
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch reviews for student {}: {}", student_id, e);
            ReviewsError::DatabaseError(format!("Fetch reviews failed: {}", e))
        })
    }

    /// Delete all reviews of a student
    /// DOCUMENTATION: Runs on the caller's connection so it can share a transaction
    pub async fn delete_by_student(
        conn: &mut SqliteConnection,
        student_id: i64,
    ) -> Result<u64, ReviewsError> {
        let result = sqlx::query("DELETE FROM reviews WHERE student_id = ?")
            .bind(student_id)
            .execute(conn)
            .await
            .map_err(|e| {
                log::error!("Failed to delete reviews for student {}: {}", student_id, e);
                ReviewsError::DatabaseError(format!("Delete reviews failed: {}", e))
            })?;

        Ok(result.rows_affected())
    }
}
