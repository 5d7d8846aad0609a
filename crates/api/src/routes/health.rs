use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    Unavailable,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub database: ServiceStatus,
}

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        let code = match self.status {
            ServiceStatus::Ok => StatusCode::OK,
            ServiceStatus::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        };
        (code, Json(self)).into_response()
    }
}

/// Every request goes through Postgres, so an unreachable database makes the
/// whole service unavailable.
async fn health(State(state): State<AppState>) -> HealthReport {
    let database = match cardify_db::health_check(&state.pool).await {
        Ok(()) => ServiceStatus::Ok,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            ServiceStatus::Unavailable
        }
    };

    HealthReport {
        status: database,
        version: env!("CARGO_PKG_VERSION"),
        database,
    }
}

/// `/health`, mounted at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
