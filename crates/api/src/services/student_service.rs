//! Student enrollment service.
//!
//! Reads fetch students, then their courses, then the courses' statuses
//! with one set-based query per level, and join them with
//! [`assemble_student_details`]. Writes run inside a single transaction per
//! call; any failure rolls back every row the call touched.

use std::collections::HashMap;

use enrollment_core::enrollment::{self, enrollment_end};
use enrollment_core::error::CoreError;
use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::DbId;
use enrollment_db::models::application_status::ApplicationStatus;
use enrollment_db::models::student::{Student, StudentFilter};
use enrollment_db::models::student_course::NewStudentCourse;
use enrollment_db::models::student_detail::{
    RegisterStudentDetail, StudentDetail, UpdateStudentDetail,
};
use enrollment_db::repositories::{ApplicationStatusRepo, StudentCourseRepo, StudentRepo};
use sqlx::PgPool;

use super::converter::assemble_student_details;
use super::ServiceResult;

/// Filters accepted by [`StudentService::search`].
///
/// Student, course and status filters are applied to their own tables
/// independently and only then joined. A course-name filter therefore does
/// not remove students whose courses fail to match; those students come
/// back with an empty course list.
#[derive(Debug, Clone, Default)]
pub struct StudentSearch {
    pub student: StudentFilter,
    pub course_name: Option<String>,
    pub status: Option<EnrollmentStatus>,
}

/// Business operations over students, their course enrollments and
/// application statuses.
pub struct StudentService;

impl StudentService {
    // ── Reads ────────────────────────────────────────────────────────

    /// List students with their courses and statuses.
    ///
    /// Soft-deleted students are excluded unless `include_deleted` is set.
    pub async fn list(pool: &PgPool, include_deleted: bool) -> ServiceResult<Vec<StudentDetail>> {
        let students = if include_deleted {
            StudentRepo::list_all(pool).await?
        } else {
            StudentRepo::list_active(pool).await?
        };
        Self::load_details(pool, students).await
    }

    /// Fetch one student with its courses and statuses.
    pub async fn get(pool: &PgPool, id: DbId) -> ServiceResult<StudentDetail> {
        let student = StudentRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Student",
                id,
            })?;

        let mut courses = StudentCourseRepo::list_by_student(pool, id).await?;
        let course_ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();
        let statuses = ApplicationStatusRepo::list_by_course_ids(pool, &course_ids).await?;

        let details = assemble_student_details(&[student], &mut courses, &statuses);
        details
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::Internal(format!("assembly dropped student {id}")).into())
    }

    /// Conditional search. See [`StudentSearch`] for how the filters combine.
    pub async fn search(pool: &PgPool, search: &StudentSearch) -> ServiceResult<Vec<StudentDetail>> {
        let students = StudentRepo::search(pool, &search.student).await?;

        let mut courses = match search.course_name.as_deref() {
            Some(name) => StudentCourseRepo::list_by_course_name(pool, name).await?,
            None => StudentCourseRepo::list_all(pool).await?,
        };

        let statuses = match search.status {
            Some(status) => ApplicationStatusRepo::list_by_status(pool, status).await?,
            None => ApplicationStatusRepo::list_all(pool).await?,
        };

        Ok(assemble_student_details(&students, &mut courses, &statuses))
    }

    /// One aggregate per (status row, course) pair currently at `status`.
    ///
    /// A student with two qualifying courses appears twice, each aggregate
    /// holding only that course and its single status row.
    pub async fn search_by_status(
        pool: &PgPool,
        status: EnrollmentStatus,
    ) -> ServiceResult<Vec<StudentDetail>> {
        let statuses = ApplicationStatusRepo::list_by_status(pool, status).await?;

        let course_ids: Vec<DbId> = statuses.iter().map(|s| s.course_id).collect();
        let courses = index_by_id(
            StudentCourseRepo::list_by_ids(pool, &course_ids).await?,
            |c| c.id,
        );

        let student_ids: Vec<DbId> = courses.values().map(|c| c.students_id).collect();
        let students = index_by_id(StudentRepo::list_by_ids(pool, &student_ids).await?, |s| {
            s.id
        });

        let mut details = Vec::with_capacity(statuses.len());
        for row in statuses {
            let Some(course) = courses.get(&row.course_id) else {
                continue;
            };
            let mut course = course.clone();
            course.status = Some(row.status);

            let student = lookup_student(&students, course.students_id)?;
            details.push(StudentDetail {
                student,
                student_course_list: vec![course],
                application_status: vec![row],
            });
        }
        Ok(details)
    }

    /// One aggregate per course whose name contains `course_name`.
    ///
    /// Each aggregate holds only the matching course and that course's
    /// status rows, even when the student has other courses.
    pub async fn search_by_course_name(
        pool: &PgPool,
        course_name: &str,
    ) -> ServiceResult<Vec<StudentDetail>> {
        let courses = StudentCourseRepo::list_by_course_name(pool, course_name).await?;

        let course_ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();
        let statuses = ApplicationStatusRepo::list_by_course_ids(pool, &course_ids).await?;

        let student_ids: Vec<DbId> = courses.iter().map(|c| c.students_id).collect();
        let students = index_by_id(StudentRepo::list_by_ids(pool, &student_ids).await?, |s| {
            s.id
        });

        let mut details = Vec::with_capacity(courses.len());
        for mut course in courses {
            let course_statuses: Vec<ApplicationStatus> = statuses
                .iter()
                .filter(|row| row.course_id == course.id)
                .cloned()
                .collect();
            if let Some(first) = course_statuses.first() {
                course.status = Some(first.status);
            }

            let student = lookup_student(&students, course.students_id)?;
            details.push(StudentDetail {
                student,
                student_course_list: vec![course],
                application_status: course_statuses,
            });
        }
        Ok(details)
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Register a student together with its course enrollments.
    ///
    /// Every course starts now and ends one year later, and gets a single
    /// status row at [`EnrollmentStatus::INITIAL`]. All inserts share one
    /// transaction.
    pub async fn register(
        pool: &PgPool,
        input: &RegisterStudentDetail,
    ) -> ServiceResult<StudentDetail> {
        let now = enrollment::now();
        let end = enrollment_end(now)
            .ok_or_else(|| CoreError::Internal(format!("enrollment period overflows at {now}")))?;

        let mut tx = pool.begin().await?;

        let student = StudentRepo::create(&mut *tx, &input.student).await?;

        let mut courses = Vec::with_capacity(input.student_course_list.len());
        let mut statuses = Vec::with_capacity(input.student_course_list.len());
        for requested in &input.student_course_list {
            let new_course = NewStudentCourse {
                students_id: student.id,
                course_name: requested.course_name.clone(),
                start_date: now,
                end_date: end,
            };
            let mut course = StudentCourseRepo::create(&mut *tx, &new_course).await?;

            let status =
                ApplicationStatusRepo::create(&mut *tx, course.id, EnrollmentStatus::INITIAL, now)
                    .await?;
            course.status = Some(status.status);

            courses.push(course);
            statuses.push(status);
        }

        tx.commit().await?;

        tracing::info!(
            student_id = student.id,
            course_count = courses.len(),
            "Registered student"
        );

        Ok(StudentDetail {
            student,
            student_course_list: courses,
            application_status: statuses,
        })
    }

    /// Replace the student row and rename the listed courses.
    ///
    /// Courses missing from the request are left alone; nothing is inserted
    /// or deleted. A listed course id with no row is skipped with a warning.
    pub async fn update(pool: &PgPool, input: &UpdateStudentDetail) -> ServiceResult<Student> {
        let mut tx = pool.begin().await?;

        let student = StudentRepo::update(&mut *tx, &input.student)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Student",
                id: input.student.id,
            })?;

        for course in &input.student_course_list {
            let renamed =
                StudentCourseRepo::update_course_name(&mut *tx, course.id, &course.course_name)
                    .await?;
            if renamed.is_none() {
                tracing::warn!(
                    student_id = student.id,
                    course_id = course.id,
                    "Course enrollment to rename does not exist, skipping"
                );
            }
        }

        tx.commit().await?;

        tracing::info!(
            student_id = student.id,
            is_deleted = student.is_deleted,
            course_count = input.student_course_list.len(),
            "Updated student"
        );

        Ok(student)
    }

    /// Move the given application status rows to `target`.
    ///
    /// Each row is mutated in place and its `updated_at` stamped with the
    /// current time. The workflow order is not enforced.
    pub async fn transition_status(
        pool: &PgPool,
        ids: &[DbId],
        target: EnrollmentStatus,
    ) -> ServiceResult<Vec<ApplicationStatus>> {
        let mut current = Vec::with_capacity(ids.len());
        for &id in ids {
            let row = ApplicationStatusRepo::find_by_id(pool, id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "ApplicationStatus",
                    id,
                })?;
            current.push(row);
        }

        let now = enrollment::now();
        let mut tx = pool.begin().await?;

        let mut updated = Vec::with_capacity(current.len());
        for row in current {
            if !row.status.is_forward_transition_to(target) {
                tracing::debug!(
                    status_id = row.id,
                    from = %row.status,
                    to = %target,
                    "Application status moved outside the linear workflow"
                );
            }
            let changed = ApplicationStatusRepo::update_status(&mut *tx, row.id, target, now)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "ApplicationStatus",
                    id: row.id,
                })?;
            updated.push(changed);
        }

        tx.commit().await?;

        tracing::info!(count = updated.len(), status = %target, "Transitioned application statuses");

        Ok(updated)
    }

    // ── Internal helpers ─────────────────────────────────────────────

    /// Fetch courses and statuses for `students` and join them.
    async fn load_details(
        pool: &PgPool,
        students: Vec<Student>,
    ) -> ServiceResult<Vec<StudentDetail>> {
        if students.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<DbId> = students.iter().map(|s| s.id).collect();
        let mut courses = StudentCourseRepo::list_by_student_ids(pool, &student_ids).await?;

        let course_ids: Vec<DbId> = courses.iter().map(|c| c.id).collect();
        let statuses = ApplicationStatusRepo::list_by_course_ids(pool, &course_ids).await?;

        Ok(assemble_student_details(&students, &mut courses, &statuses))
    }
}

fn index_by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> DbId) -> HashMap<DbId, T> {
    rows.into_iter().map(|row| (id(&row), row)).collect()
}

fn lookup_student(students: &HashMap<DbId, Student>, id: DbId) -> ServiceResult<Student> {
    students.get(&id).cloned().ok_or_else(|| {
        CoreError::NotFound {
            entity: "Student",
            id,
        }
        .into()
    })
}
