//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Reads
//! accept `&PgPool`; writes accept `&mut PgConnection` so callers can run
//! several of them inside one transaction.

pub mod application_status_repo;
pub mod student_course_repo;
pub mod student_repo;

pub use application_status_repo::ApplicationStatusRepo;
pub use student_course_repo::StudentCourseRepo;
pub use student_repo::StudentRepo;
