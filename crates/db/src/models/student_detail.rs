//! The student detail aggregate and its request shapes.
//!
//! A [`StudentDetail`] is assembled on every read and never stored.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::application_status::ApplicationStatus;
use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::models::student_course::{CreateStudentCourse, StudentCourse, UpdateStudentCourse};

/// A student with its course enrollments and their application statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub student: Student,
    pub student_course_list: Vec<StudentCourse>,
    pub application_status: Vec<ApplicationStatus>,
}

/// Request body for `POST /students`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStudentDetail {
    #[validate(nested)]
    pub student: CreateStudent,
    #[serde(default)]
    #[validate(nested)]
    pub student_course_list: Vec<CreateStudentCourse>,
}

/// Request body for `PUT /students`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDetail {
    #[validate(nested)]
    pub student: UpdateStudent,
    #[serde(default)]
    #[validate(nested)]
    pub student_course_list: Vec<UpdateStudentCourse>,
}
