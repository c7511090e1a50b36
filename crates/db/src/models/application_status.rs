//! Application status entity model.

use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `application_statuses` table.
///
/// `status` is read from the `status_id` column, which references the
/// `enrollment_statuses` lookup table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatus {
    pub id: DbId,
    pub course_id: DbId,
    #[sqlx(try_from = "i16")]
    pub status: EnrollmentStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
