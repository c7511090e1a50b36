//! Repository for the `students` table.

use enrollment_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, full_name, furigana, nickname, email_address, address, age, sex, remark, is_deleted";

/// Provides search, insert and full-row update for students. There is no delete.
pub struct StudentRepo;

impl StudentRepo {
    /// List every student, soft-deleted ones included, ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// List students whose soft-delete flag is false, ordered by id.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE is_deleted = false ORDER BY id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Find a student by id, regardless of the soft-delete flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch all students whose id is in `ids`, ordered by id.
    pub async fn list_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Student>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Conditional search over active students.
    ///
    /// Each filter that is `Some` narrows the result; the rest are ignored.
    /// `full_name`, `furigana` and `address` match substrings.
    pub async fn search(
        pool: &PgPool,
        filter: &StudentFilter,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students
             WHERE is_deleted = false
               AND ($1::TEXT IS NULL OR strpos(full_name, $1) > 0)
               AND ($2::TEXT IS NULL OR strpos(furigana, $2) > 0)
               AND ($3::TEXT IS NULL OR strpos(address, $3) > 0)
               AND ($4::INTEGER IS NULL OR age = $4)
               AND ($5::TEXT IS NULL OR sex = $5)
             ORDER BY id"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&filter.full_name)
            .bind(&filter.furigana)
            .bind(&filter.address)
            .bind(filter.age)
            .bind(&filter.sex)
            .fetch_all(pool)
            .await
    }

    /// Insert a new student, returning the created row with its assigned id.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateStudent,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (full_name, furigana, nickname, email_address, address, age, sex, remark, is_deleted)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.full_name)
            .bind(&input.furigana)
            .bind(&input.nickname)
            .bind(&input.email_address)
            .bind(&input.address)
            .bind(input.age)
            .bind(&input.sex)
            .bind(&input.remark)
            .bind(input.is_deleted)
            .fetch_one(&mut *conn)
            .await
    }

    /// Replace every column of a student row.
    ///
    /// Returns `None` if no row with `input.id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                full_name = $2,
                furigana = $3,
                nickname = $4,
                email_address = $5,
                address = $6,
                age = $7,
                sex = $8,
                remark = $9,
                is_deleted = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(input.id)
            .bind(&input.full_name)
            .bind(&input.furigana)
            .bind(&input.nickname)
            .bind(&input.email_address)
            .bind(&input.address)
            .bind(input.age)
            .bind(&input.sex)
            .bind(&input.remark)
            .bind(input.is_deleted)
            .fetch_optional(&mut *conn)
            .await
    }
}
