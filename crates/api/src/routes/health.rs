//! Liveness probe for the enrollment service.
//!
//! Mounted at the root rather than under `/api/v1`, so load balancers can
//! poll it without knowing the API version.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
///
/// `status` is `"ok"` when the student database answers, `"degraded"`
/// otherwise. The endpoint itself always answers 200.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_db_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let probe = enrollment_db::health_check(&state.pool).await;
    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Student database is unreachable");
    }
    Json(HealthReport::from_db_probe(probe.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_database_reports_degraded() {
        let report = HealthReport::from_db_probe(false);
        assert_eq!(report.status, "degraded");
        assert!(!report.db_healthy);
    }

    #[test]
    fn reachable_database_reports_ok() {
        assert_eq!(HealthReport::from_db_probe(true).status, "ok");
    }
}
