//! Assembles flat student, course and status lists into [`StudentDetail`] aggregates.
//!
//! Pure and synchronous. The only side effect is that the `status` field of
//! each matched course is stamped in place on the caller's slice.

use std::collections::{HashMap, HashSet};

use enrollment_core::status::EnrollmentStatus;
use enrollment_core::types::DbId;
use enrollment_db::models::application_status::ApplicationStatus;
use enrollment_db::models::student::Student;
use enrollment_db::models::student_course::StudentCourse;
use enrollment_db::models::student_detail::StudentDetail;

/// Join students with their courses and statuses by foreign key.
///
/// For each student, in input order:
///
/// 1. Select the courses whose `students_id` matches, keeping input order.
/// 2. Stamp each selected course with the status of the first row in
///    `statuses` whose `course_id` matches. Courses without a match keep
///    whatever `status` they already had.
/// 3. Attach every status row belonging to a selected course, in input order.
///
/// A student without courses yields an aggregate with empty lists.
pub fn assemble_student_details(
    students: &[Student],
    courses: &mut [StudentCourse],
    statuses: &[ApplicationStatus],
) -> Vec<StudentDetail> {
    let mut first_status: HashMap<DbId, EnrollmentStatus> = HashMap::new();
    for row in statuses {
        first_status.entry(row.course_id).or_insert(row.status);
    }

    let student_ids: HashSet<DbId> = students.iter().map(|s| s.id).collect();
    for course in courses
        .iter_mut()
        .filter(|course| student_ids.contains(&course.students_id))
    {
        if let Some(status) = first_status.get(&course.id) {
            course.status = Some(*status);
        }
    }

    students
        .iter()
        .map(|student| {
            let student_courses: Vec<StudentCourse> = courses
                .iter()
                .filter(|course| course.students_id == student.id)
                .cloned()
                .collect();

            let course_ids: HashSet<DbId> = student_courses.iter().map(|c| c.id).collect();
            let application_status = statuses
                .iter()
                .filter(|row| course_ids.contains(&row.course_id))
                .cloned()
                .collect();

            StudentDetail {
                student: student.clone(),
                student_course_list: student_courses,
                application_status,
            }
        })
        .collect()
}
