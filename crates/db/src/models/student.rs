//! Student entity model and DTOs.

use enrollment_core::types::DbId;
use enrollment_core::validation::not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: DbId,
    pub full_name: String,
    /// Phonetic reading of `full_name`.
    pub furigana: String,
    pub nickname: Option<String>,
    pub email_address: String,
    pub address: String,
    pub age: i32,
    pub sex: String,
    pub remark: Option<String>,
    /// Soft-delete flag. Students are never physically removed.
    pub is_deleted: bool,
}

/// DTO for registering a new student. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "not_blank"))]
    pub furigana: String,
    pub nickname: Option<String>,
    #[validate(custom(function = "not_blank"), email)]
    pub email_address: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(custom(function = "not_blank"))]
    pub sex: String,
    pub remark: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// DTO for a full-row replacement of an existing student.
///
/// Flipping `is_deleted` here is the only way to delete a student.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudent {
    pub id: DbId,
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "not_blank"))]
    pub furigana: String,
    pub nickname: Option<String>,
    #[validate(custom(function = "not_blank"), email)]
    pub email_address: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(custom(function = "not_blank"))]
    pub sex: String,
    pub remark: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Optional filters for the conditional student search.
///
/// `None` matches everything. Text filters match substrings except `sex`,
/// which must match exactly, as must `age`.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub full_name: Option<String>,
    pub furigana: Option<String>,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
}
