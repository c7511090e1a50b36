//! Route definitions for the `/students` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> register
/// PUT    /                         -> update
/// GET    /search                   -> search
/// GET    /status/{status}          -> search_by_status
/// GET    /courses                  -> search_by_course_name
/// PUT    /request-status           -> request_status
/// GET    /{id}                     -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(student::list)
                .post(student::register)
                .put(student::update),
        )
        .route("/search", get(student::search))
        .route("/status/{status}", get(student::search_by_status))
        .route("/courses", get(student::search_by_course_name))
        .route("/request-status", put(student::request_status))
        .route("/{id}", get(student::get_by_id))
}
