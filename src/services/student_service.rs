// src/services/student_service.rs
// DOCUMENTATION: Business logic for students
// PURPOSE: Intermediary between handlers and repositories, builds the API projections

use crate::db::{ReviewRepository, StudentRepository};
use crate::errors::ReviewsError;
use crate::models::{CreateStudentRequest, Review, StudentDetailResponse, StudentSummary};
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct StudentService;

impl StudentService {
    /// List all students with their average rating
    /// DOCUMENTATION: Two queries total; reviews are grouped in memory
    pub async fn list_students(pool: &SqlitePool) -> Result<Vec<StudentSummary>, ReviewsError> {
        let students = StudentRepository::list_all(pool).await?;
        let reviews = ReviewRepository::list_all(pool).await?;

        let mut by_student: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_student
                .entry(review.student_id)
                .or_default()
                .push(review);
        }

        Ok(students
            .iter()
            .map(|s| {
                let reviews = by_student.get(&s.id).map(Vec::as_slice).unwrap_or(&[]);
                s.to_summary(reviews)
            })
            .collect())
    }

    /// Create a new student (no reviews yet)
    pub async fn create_student(
        pool: &SqlitePool,
        req: CreateStudentRequest,
    ) -> Result<StudentDetailResponse, ReviewsError> {
        let student = StudentRepository::create_student(pool, &req).await?;
        Ok(student.to_detail(Vec::new()))
    }

    /// Get a student by name with all nested reviews
    pub async fn get_student(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<StudentDetailResponse, ReviewsError> {
        let student = StudentRepository::get_by_name(pool, name).await?;
        let reviews = ReviewRepository::get_reviews_by_student(pool, student.id).await?;
        Ok(student.to_detail(reviews))
    }

    /// Delete a student by name along with its reviews
    pub async fn delete_student(pool: &SqlitePool, name: &str) -> Result<(), ReviewsError> {
        let student = StudentRepository::get_by_name(pool, name).await?;
        StudentRepository::delete_with_reviews(pool, student.id).await?;
        Ok(())
    }
}
