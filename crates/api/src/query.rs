//! Query parameter types for the student handlers.

use enrollment_core::types::DbId;
use serde::Deserialize;

/// `GET /students?includeDeleted=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListParams {
    #[serde(default)]
    pub include_deleted: bool,
}

/// `GET /students/search?fullName&furigana&address&age&sex&courseName&status`
///
/// Every parameter is optional. `status` is parsed by the handler so an
/// unknown value produces the standard validation error body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSearchParams {
    pub full_name: Option<String>,
    pub furigana: Option<String>,
    pub address: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub course_name: Option<String>,
    pub status: Option<String>,
}

/// `GET /students/courses?courseName=`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseNameParams {
    pub course_name: String,
}

/// `PUT /students/request-status?id=&status=`
#[derive(Debug, Deserialize)]
pub struct RequestStatusParams {
    /// Application status row to transition.
    pub id: DbId,
    /// Target status, e.g. `confirmed_application`.
    pub status: String,
}
