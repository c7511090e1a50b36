//! Repository for the `application_statuses` table.

use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::application_status::ApplicationStatus;

/// Column list shared across queries. `status_id` is aliased to match the
/// `status` field of [`ApplicationStatus`].
const COLUMNS: &str = "id, course_id, status_id AS status, created_at, updated_at";

/// Provides search, insert and in-place status updates for application statuses.
pub struct ApplicationStatusRepo;

impl ApplicationStatusRepo {
    /// List every application status, ordered by course then id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ApplicationStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM application_statuses ORDER BY course_id, id");
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an application status by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicationStatus>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM application_statuses WHERE id = $1");
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the statuses attached to any of `course_ids`, ordered by course then id.
    pub async fn list_by_course_ids(
        pool: &PgPool,
        course_ids: &[DbId],
    ) -> Result<Vec<ApplicationStatus>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM application_statuses
             WHERE course_id = ANY($1)
             ORDER BY course_id, id"
        );
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .bind(course_ids)
            .fetch_all(pool)
            .await
    }

    /// List the statuses currently set to `status`, ordered by id.
    pub async fn list_by_status(
        pool: &PgPool,
        status: EnrollmentStatus,
    ) -> Result<Vec<ApplicationStatus>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM application_statuses WHERE status_id = $1 ORDER BY id");
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .bind(status.id())
            .fetch_all(pool)
            .await
    }

    /// Insert a status row for a course enrollment with `created_at = updated_at = at`.
    pub async fn create(
        conn: &mut PgConnection,
        course_id: DbId,
        status: EnrollmentStatus,
        at: Timestamp,
    ) -> Result<ApplicationStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO application_statuses (course_id, status_id, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .bind(course_id)
            .bind(status.id())
            .bind(at)
            .fetch_one(&mut *conn)
            .await
    }

    /// Overwrite the status and `updated_at` of an existing row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        conn: &mut PgConnection,
        id: DbId,
        status: EnrollmentStatus,
        updated_at: Timestamp,
    ) -> Result<Option<ApplicationStatus>, sqlx::Error> {
        let query = format!(
            "UPDATE application_statuses SET status_id = $2, updated_at = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationStatus>(&query)
            .bind(id)
            .bind(status.id())
            .bind(updated_at)
            .fetch_optional(&mut *conn)
            .await
    }
}
