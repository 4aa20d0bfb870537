// src/db/seed.rs
// DOCUMENTATION: Demonstration fixtures
// PURPOSE: Fill an empty database with a fixed set of students and reviews

use crate::errors::ReviewsError;
use crate::models::{DEFAULT_AUTHOR, DEFAULT_RATING, DEFAULT_REVIEW_TEXT};
use sqlx::SqlitePool;

struct StudentFixture {
    name: &'static str,
    email: &'static str,
}

/// Ratings are intelligence, attendance, participation, sarcasm
struct ReviewFixture {
    student: usize,
    course: &'static str,
    author: Option<&'static str>,
    review: Option<&'static str>,
    ratings: [Option<i64>; 4],
}

const STUDENTS: &[StudentFixture] = &[
    StudentFixture {
        name: "Harry Potter",
        email: "hpotter@hogwarts.edu",
    },
    StudentFixture {
        name: "Hermione Granger",
        email: "granger@hogwarts.edu",
    },
    StudentFixture {
        name: "Viktor Krum",
        email: "krum@durmstrang.edu",
    },
    StudentFixture {
        name: "Tom Marvolo Riddle",
        email: "iamlordvoldemort@hogwarts.edu",
    },
    StudentFixture {
        name: "Ron Weasley",
        email: "ronny@hogwarts.edu",
    },
    StudentFixture {
        name: "Fleur Delacour",
        email: "fleur@beauxbatons.edu",
    },
];

const REVIEWS: &[ReviewFixture] = &[
    ReviewFixture {
        student: 0,
        course: "Potions-102",
        author: None,
        review: Some("Mr. Potter is the most arrogant student to have stepped foot into my classroom! "),
        ratings: [Some(1), Some(1), Some(1), Some(5)],
    },
    ReviewFixture {
        student: 0,
        course: "Charms-401",
        author: Some("Prof. Flitwick"),
        review: Some("Harry is a brilliant student. He is well on his way to becoming a world famous Auror. "),
        ratings: [Some(5), Some(5), Some(5), Some(5)],
    },
    ReviewFixture {
        student: 0,
        course: "Herbology-116",
        author: None,
        review: Some("Potter is one of the smartest students, I have known. He would ace this class, if he didn't sneak out of his dorm every night.  "),
        ratings: [Some(4), Some(1), Some(5), None],
    },
    ReviewFixture {
        student: 1,
        course: "Potions-102",
        author: None,
        review: Some("Ms. Grainger has the unique distinction of being an insufferable know-it-all "),
        ratings: [Some(5), Some(5), Some(1), Some(1)],
    },
    ReviewFixture {
        student: 1,
        course: "DADA-400",
        author: None,
        review: Some("Best student ever!"),
        ratings: [Some(5), Some(5), Some(5), Some(5)],
    },
    ReviewFixture {
        student: 2,
        course: "Quidditch-101",
        author: None,
        review: Some("Future World cup Winner!"),
        ratings: [Some(1), Some(5), None, None],
    },
    ReviewFixture {
        student: 3,
        course: "Transfiguration-301",
        author: None,
        review: Some("A brilliant student. But seems a bit odd. He seems fixated on creating Horcruxes."),
        ratings: [Some(5), Some(5), Some(1), None],
    },
    ReviewFixture {
        student: 4,
        course: "Charms-401",
        author: None,
        review: Some("Another Weasley! Atleast this one's not as much of a troublemaker like his brothers."),
        ratings: [None, None, None, None],
    },
];

/// Summary of a seeding run
#[derive(Debug, Default, PartialEq)]
pub struct SeedStats {
    pub students_created: usize,
    pub reviews_created: usize,
}

/// Insert the demonstration students and reviews
/// DOCUMENTATION: Runs in one transaction. A database that already holds
/// students is left untouched and reported as zero inserts.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<SeedStats, ReviewsError> {
    let db_err = |e: sqlx::Error| {
        log::error!("Seeding demo data failed: {}", e);
        ReviewsError::DatabaseError(format!("Seed failed: {}", e))
    };

    let mut tx = pool.begin().await.map_err(db_err)?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err)?;

    if existing > 0 {
        log::info!(
            "Skipping demo data: {} student(s) already present",
            existing
        );
        return Ok(SeedStats::default());
    }

    let mut student_ids = Vec::with_capacity(STUDENTS.len());
    for fixture in STUDENTS {
        let (id,): (i64,) =
            sqlx::query_as("INSERT INTO students (name, email) VALUES (?, ?) RETURNING id")
                .bind(fixture.name)
                .bind(fixture.email)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_err)?;
        student_ids.push(id);
    }

    for fixture in REVIEWS {
        let [intelligence, attendance, participation, sarcasm] =
            fixture.ratings.map(|r| r.unwrap_or(DEFAULT_RATING));

        sqlx::query(
            r#"
            INSERT INTO reviews (
                course, author, student_id, review,
                intelligence, attendance, participation, sarcasm
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fixture.course)
        .bind(fixture.author.unwrap_or(DEFAULT_AUTHOR))
        .bind(student_ids[fixture.student])
        .bind(fixture.review.unwrap_or(DEFAULT_REVIEW_TEXT))
        .bind(intelligence)
        .bind(attendance)
        .bind(participation)
        .bind(sarcasm)
        .execute(&mut *tx)
        .await
        .map_err(db_err)?;
    }

    tx.commit().await.map_err(db_err)?;

    let stats = SeedStats {
        students_created: STUDENTS.len(),
        reviews_created: REVIEWS.len(),
    };
    log::info!(
        "Seeded demo data: {} students, {} reviews",
        stats.students_created,
        stats.reviews_created
    );
    Ok(stats)
}
