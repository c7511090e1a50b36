pub mod health;
pub mod student;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                        list, register, update
/// /students/search                                 conditional search
/// /students/status/{status}                        search by application status
/// /students/courses                                search by course name
/// /students/request-status                         status transition (PUT)
/// /students/{id}                                   get by id
///
/// /studentsList                                    retired, always 400
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", student::router())
        .route("/studentsList", get(handlers::student::legacy_list))
}
