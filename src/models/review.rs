// src/models/review.rs
// DOCUMENTATION: Review ("blog") records written about a student
// PURPOSE: Database row, request DTO and derived score

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_REVIEW_TEXT: &str =
    "This student is the worst student I have seen in all my life";
pub const DEFAULT_RATING: i64 = 3;

/// Peer review of a student for one course
/// DOCUMENTATION: Maps directly to the reviews table; also the JSON shape of
/// every review returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub course: String,
    pub author: String,
    pub student_id: i64,
    pub review: String,
    pub intelligence: i64,
    pub attendance: i64,
    pub participation: i64,
    pub sarcasm: i64,
}

impl Review {
    /// Mean of the four rating dimensions, unrounded
    pub fn overall_score(&self) -> f64 {
        (self.intelligence + self.attendance + self.participation + self.sarcasm) as f64 / 4.0
    }
}

/// Request to create a new review
/// DOCUMENTATION: Body of POST /blogs/{student_id}
/// Omitted fields fall back to the column defaults; the owning student always
/// comes from the path, so a `student_id` in the body is accepted but ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 100))]
    pub course: String,

    #[validate(length(max = 100))]
    pub author: Option<String>,

    #[validate(length(max = 1000))]
    pub review: Option<String>,

    pub student_id: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub intelligence: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub attendance: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub participation: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub sarcasm: Option<i64>,
}

/// Fully resolved review ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub course: String,
    pub author: String,
    pub student_id: i64,
    pub review: String,
    pub intelligence: i64,
    pub attendance: i64,
    pub participation: i64,
    pub sarcasm: i64,
}

impl CreateReviewRequest {
    /// Apply defaults and bind the review to `student_id`
    pub fn into_new_review(self, student_id: i64) -> NewReview {
        NewReview {
            course: self.course,
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            student_id,
            review: self.review.unwrap_or_else(|| DEFAULT_REVIEW_TEXT.to_string()),
            intelligence: self.intelligence.unwrap_or(DEFAULT_RATING),
            attendance: self.attendance.unwrap_or(DEFAULT_RATING),
            participation: self.participation.unwrap_or(DEFAULT_RATING),
            sarcasm: self.sarcasm.unwrap_or(DEFAULT_RATING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(intelligence: i64, attendance: i64, participation: i64, sarcasm: i64) -> Review {
        Review {
            id: 1,
            course: "Potions-102".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            student_id: 1,
            review: DEFAULT_REVIEW_TEXT.to_string(),
            intelligence,
            attendance,
            participation,
            sarcasm,
        }
    }

    #[test]
    fn test_overall_score_is_unrounded_mean() {
        assert_eq!(review(1, 1, 1, 5).overall_score(), 2.0);
        assert_eq!(review(4, 1, 5, 3).overall_score(), 3.25);
        assert_eq!(review(5, 5, 5, 5).overall_score(), 5.0);
    }

    #[test]
    fn test_defaults_applied() {
        let req = CreateReviewRequest {
            course: "Charms-401".to_string(),
            intelligence: Some(5),
            ..Default::default()
        };

        let new = req.into_new_review(7);

        assert_eq!(new.student_id, 7);
        assert_eq!(new.author, "Anonymous");
        assert_eq!(new.review, DEFAULT_REVIEW_TEXT);
        assert_eq!(new.intelligence, 5);
        assert_eq!(new.attendance, 3);
        assert_eq!(new.participation, 3);
        assert_eq!(new.sarcasm, 3);
    }

    #[test]
    fn test_path_student_id_wins() {
        let req = CreateReviewRequest {
            course: "DADA-400".to_string(),
            student_id: Some(99),
            ..Default::default()
        };

        assert_eq!(req.into_new_review(2).student_id, 2);
    }

    #[test]
    fn test_rating_range_validation() {
        for bad in [0, 6, -1] {
            let req = CreateReviewRequest {
                course: "Potions-102".to_string(),
                sarcasm: Some(bad),
                ..Default::default()
            };
            assert!(req.validate().is_err(), "rating {} should be rejected", bad);
        }

        for good in 1..=5 {
            let req = CreateReviewRequest {
                course: "Potions-102".to_string(),
                intelligence: Some(good),
                attendance: Some(good),
                participation: Some(good),
                sarcasm: Some(good),
                ..Default::default()
            };
            assert!(req.validate().is_ok(), "rating {} should be accepted", good);
        }
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let parsed: Result<CreateReviewRequest, _> =
            serde_json::from_str(r#"{"course": "Potions-102", "grade": "A"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_course_required() {
        let parsed: Result<CreateReviewRequest, _> =
            serde_json::from_str(r#"{"review": "Fine"}"#);
        assert!(parsed.is_err());

        let empty = CreateReviewRequest::default();
        assert!(empty.validate().is_err());
    }
}
