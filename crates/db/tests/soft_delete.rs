//! Integration tests for soft-delete behaviour.
//!
//! Students are deleted by flipping `is_deleted` through a full-row update.
//! Verifies that:
//! - Active listings and conditional search hide soft-deleted students
//! - The full listing and id lookup still return them
//! - Clearing the flag makes a student active again

use enrollment_db::models::student::{CreateStudent, Student, StudentFilter, UpdateStudent};
use enrollment_db::repositories::StudentRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_student(full_name: &str) -> CreateStudent {
    CreateStudent {
        full_name: full_name.to_string(),
        furigana: full_name.to_string(),
        nickname: None,
        email_address: "student@example.com".to_string(),
        address: "Tokyo".to_string(),
        age: 20,
        sex: "female".to_string(),
        remark: None,
        is_deleted: false,
    }
}

fn with_deleted_flag(student: &Student, is_deleted: bool) -> UpdateStudent {
    UpdateStudent {
        id: student.id,
        full_name: student.full_name.clone(),
        furigana: student.furigana.clone(),
        nickname: student.nickname.clone(),
        email_address: student.email_address.clone(),
        address: student.address.clone(),
        age: student.age,
        sex: student.sex.clone(),
        remark: student.remark.clone(),
        is_deleted,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_student_is_hidden_from_active_list(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let kept = StudentRepo::create(&mut conn, &new_student("Kept")).await.unwrap();
    let gone = StudentRepo::create(&mut conn, &new_student("Gone")).await.unwrap();

    StudentRepo::update(&mut conn, &with_deleted_flag(&gone, true))
        .await
        .unwrap()
        .expect("student exists");

    let active = StudentRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, kept.id);

    let all = StudentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|s| s.id == gone.id && s.is_deleted));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_student_is_still_found_by_id(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let gone = StudentRepo::create(&mut conn, &new_student("Gone")).await.unwrap();
    StudentRepo::update(&mut conn, &with_deleted_flag(&gone, true))
        .await
        .unwrap();

    let found = StudentRepo::find_by_id(&pool, gone.id)
        .await
        .unwrap()
        .expect("row is never removed");
    assert!(found.is_deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_student_is_excluded_from_search(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let gone = StudentRepo::create(&mut conn, &new_student("Gone")).await.unwrap();
    StudentRepo::update(&mut conn, &with_deleted_flag(&gone, true))
        .await
        .unwrap();

    let filter = StudentFilter {
        full_name: Some("Gone".into()),
        ..Default::default()
    };
    assert!(StudentRepo::search(&pool, &filter).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clearing_the_flag_restores_the_student(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let student = StudentRepo::create(&mut conn, &new_student("Back")).await.unwrap();
    let deleted = StudentRepo::update(&mut conn, &with_deleted_flag(&student, true))
        .await
        .unwrap()
        .unwrap();
    StudentRepo::update(&mut conn, &with_deleted_flag(&deleted, false))
        .await
        .unwrap()
        .unwrap();

    let active = StudentRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 1);
    assert!(!active[0].is_deleted);
}
