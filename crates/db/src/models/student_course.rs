//! Course enrollment entity model and DTOs.

use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::{DbId, Timestamp};
use enrollment_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `student_courses` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourse {
    pub id: DbId,
    pub students_id: DbId,
    pub course_name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    /// Copied from the course's application status at read time. Not persisted.
    #[sqlx(skip)]
    pub status: Option<EnrollmentStatus>,
}

/// A course enrollment as submitted with a registration request.
///
/// Owner and enrollment period are filled in by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentCourse {
    #[validate(custom(function = "not_blank"))]
    pub course_name: String,
}

/// Fully-resolved insert for the `student_courses` table.
#[derive(Debug, Clone)]
pub struct NewStudentCourse {
    pub students_id: DbId,
    pub course_name: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// DTO for correcting the name of an existing course enrollment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentCourse {
    pub id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub course_name: String,
}
