// src/db/student_repository.rs
// DOCUMENTATION: Student database operations
// PURPOSE: Insert, look up and delete students

use crate::errors::ReviewsError;
use crate::models::{CreateStudentRequest, Student};
use sqlx::SqlitePool;

use super::ReviewRepository;

pub struct StudentRepository;

impl StudentRepository {
    /// Create a new student
    /// DOCUMENTATION: A missing id lets SQLite assign the next rowid.
    /// Duplicate emails fail on the UNIQUE constraint.
    pub async fn create_student(
        pool: &SqlitePool,
        req: &CreateStudentRequest,
    ) -> Result<Student, ReviewsError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, name, email)
            VALUES (?, ?, ?)
            RETURNING id, name, email
            "#,
        )
        .bind(req.id)
        .bind(&req.name)
        .bind(&req.email)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create student {}: {}", req.email, e);
            ReviewsError::DatabaseError(format!("Create student failed: {}", e))
        })?;

        log::info!("Created student {} ({})", student.id, student.name);
        Ok(student)
    }

    /// List every student in id order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Student>, ReviewsError> {
        sqlx::query_as::<_, Student>("SELECT id, name, email FROM students ORDER BY id")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list students: {}", e);
                ReviewsError::DatabaseError(format!("List students failed: {}", e))
            })
    }

    /// Get a student by exact name
    /// DOCUMENTATION: Names are not unique; the lowest id wins
    pub async fn get_by_name(pool: &SqlitePool, name: &str) -> Result<Student, ReviewsError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, email
            FROM students
            WHERE name = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching student {}: {}", name, e);
            ReviewsError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Student not found: {}", name);
            ReviewsError::NotFound(format!("Student '{}'", name))
        })
    }

    /// Delete a student together with its reviews
    /// DOCUMENTATION: Reviews first, then the student, in one transaction.
    /// Returns the number of reviews removed.
    pub async fn delete_with_reviews(pool: &SqlitePool, id: i64) -> Result<u64, ReviewsError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open transaction for student {}: {}", id, e);
            ReviewsError::DatabaseError(e.to_string())
        })?;

        let reviews_deleted = ReviewRepository::delete_by_student(&mut tx, id).await?;

        let rows = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Delete failed for student {}: {}", id, e);
                ReviewsError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            // dropping tx rolls back the review deletion
            return Err(ReviewsError::NotFound(format!("Student {}", id)));
        }

        tx.commit().await.map_err(|e| {
            log::error!("Commit failed deleting student {}: {}", id, e);
            ReviewsError::DatabaseError(e.to_string())
        })?;

        log::info!("Deleted student {} and {} review(s)", id, reviews_deleted);
        Ok(reviews_deleted)
    }
}
