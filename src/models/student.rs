// src/models/student.rs
// DOCUMENTATION: Core data structures for students
// PURPOSE: Database row, request DTO and the two API projections

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::Review;

/// Represents a student record from the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Auto-assigned unless provided on creation
    pub id: i64,

    pub name: String,

    /// Unique across all students (enforced by the store)
    pub email: String,
}

/// Request DTO for creating a new student
/// DOCUMENTATION: Body of POST /students; only the settable fields are accepted
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentRequest {
    /// Explicit id (optional, auto-assigned when absent)
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email, length(max = 100))]
    pub email: String,
}

/// Full representation with nested reviews
/// DOCUMENTATION: Returned by POST /students and GET /students/{name}
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentDetailResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub reviews: Vec<Review>,
}

/// Summary row for GET /students
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StudentSummary {
    pub name: String,
    pub email: String,
    pub avg_rating: String,
}

impl Student {
    pub fn to_detail(&self, reviews: Vec<Review>) -> StudentDetailResponse {
        StudentDetailResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            reviews,
        }
    }

    /// Summary projection; `reviews` must be this student's reviews
    pub fn to_summary(&self, reviews: &[Review]) -> StudentSummary {
        StudentSummary {
            name: self.name.clone(),
            email: self.email.clone(),
            avg_rating: format_avg_rating(reviews),
        }
    }
}

/// Mean overall score with two decimals, or "N/A" without reviews
pub fn format_avg_rating(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "N/A".to_string();
    }

    let total: f64 = reviews.iter().map(Review::overall_score).sum();
    format!("{:.2}", total / reviews.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(scores: [i64; 4]) -> Review {
        Review {
            id: 0,
            course: "Herbology-116".to_string(),
            author: "Anonymous".to_string(),
            student_id: 1,
            review: String::new(),
            intelligence: scores[0],
            attendance: scores[1],
            participation: scores[2],
            sarcasm: scores[3],
        }
    }

    #[test]
    fn test_avg_rating_without_reviews() {
        assert_eq!(format_avg_rating(&[]), "N/A");
    }

    #[test]
    fn test_avg_rating_two_decimals() {
        let reviews = vec![
            review([1, 1, 1, 5]),
            review([5, 5, 5, 5]),
            review([4, 1, 5, 3]),
        ];

        // (2.00 + 5.00 + 3.25) / 3
        assert_eq!(format_avg_rating(&reviews), "3.42");
        assert_eq!(format_avg_rating(&reviews[1..2]), "5.00");
    }

    #[test]
    fn test_summary_projection() {
        let student = Student {
            id: 3,
            name: "Viktor Krum".to_string(),
            email: "krum@durmstrang.edu".to_string(),
        };

        let summary = student.to_summary(&[review([1, 5, 3, 3])]);
        assert_eq!(summary.avg_rating, "3.00");
        assert_eq!(summary.name, "Viktor Krum");

        let detail = student.to_detail(Vec::new());
        assert_eq!(detail.id, 3);
        assert!(detail.reviews.is_empty());
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let parsed: Result<CreateStudentRequest, _> = serde_json::from_str(
            r#"{"name": "Ron Weasley", "email": "ronny@hogwarts.edu", "house": "Gryffindor"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreateStudentRequest {
            id: None,
            name: "Ron Weasley".to_string(),
            email: "ronny@hogwarts.edu".to_string(),
        };
        assert!(ok.validate().is_ok());

        let no_name = CreateStudentRequest {
            name: String::new(),
            ..ok.clone()
        };
        assert!(no_name.validate().is_err());

        let bad_email = CreateStudentRequest {
            email: "not-an-email".to_string(),
            ..ok
        };
        assert!(bad_email.validate().is_err());
    }
}
