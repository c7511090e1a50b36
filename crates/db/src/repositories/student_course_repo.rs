//! Repository for the `student_courses` table.

use enrollment_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::student_course::{NewStudentCourse, StudentCourse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, students_id, course_name, start_date, end_date";

/// Provides search, insert and course-name correction for course enrollments.
///
/// Rows come back with `status` unset; the service fills it in.
pub struct StudentCourseRepo;

impl StudentCourseRepo {
    /// List every course enrollment, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<StudentCourse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_courses ORDER BY id");
        sqlx::query_as::<_, StudentCourse>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the course enrollments owned by one student, ordered by id.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentCourse>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM student_courses WHERE students_id = $1 ORDER BY id");
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// List the course enrollments owned by any of `student_ids`, ordered by id.
    pub async fn list_by_student_ids(
        pool: &PgPool,
        student_ids: &[DbId],
    ) -> Result<Vec<StudentCourse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_courses WHERE students_id = ANY($1) ORDER BY id"
        );
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(student_ids)
            .fetch_all(pool)
            .await
    }

    /// Fetch the course enrollments whose id is in `ids`, ordered by id.
    pub async fn list_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<StudentCourse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM student_courses WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List course enrollments whose name contains `course_name`, ordered by id.
    pub async fn list_by_course_name(
        pool: &PgPool,
        course_name: &str,
    ) -> Result<Vec<StudentCourse>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_courses WHERE strpos(course_name, $1) > 0 ORDER BY id"
        );
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(course_name)
            .fetch_all(pool)
            .await
    }

    /// Insert a course enrollment, returning the created row with its assigned id.
    pub async fn create(
        conn: &mut PgConnection,
        input: &NewStudentCourse,
    ) -> Result<StudentCourse, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_courses (students_id, course_name, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(input.students_id)
            .bind(&input.course_name)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(&mut *conn)
            .await
    }

    /// Rename a course enrollment. Every other column is left untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_course_name(
        conn: &mut PgConnection,
        id: DbId,
        course_name: &str,
    ) -> Result<Option<StudentCourse>, sqlx::Error> {
        let query = format!(
            "UPDATE student_courses SET course_name = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudentCourse>(&query)
            .bind(id)
            .bind(course_name)
            .fetch_optional(&mut *conn)
            .await
    }
}
