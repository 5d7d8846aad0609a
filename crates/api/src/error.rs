use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cardify_core::error::CoreError;
use serde::Serialize;

/// Message returned in place of anything that may leak internals.
const SANITIZED_MESSAGE: &str = "An internal error occurred";

/// Postgres SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Failure of an HTTP handler.
///
/// Domain failures arrive as [`CoreError`]; storage failures arrive straight
/// from sqlx. Either way the client sees a `{ "error", "code" }` body whose
/// `code` names the failure kind.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    /// Status, machine-readable code and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => match unique_violation(err) {
                Some(constraint) => (
                    StatusCode::CONFLICT,
                    "ALREADY_EXISTS",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                None => {
                    tracing::error!(error = %err, "Database error");
                    internal()
                }
            },
        }
    }
}

fn core_parts(err: &CoreError) -> (StatusCode, &'static str, String) {
    let (status, code) = match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CoreError::AccessDenied(_) => (StatusCode::FORBIDDEN, "ACCESS_DENIED"),
        CoreError::ValidationFailed(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
        CoreError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
        CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            return internal();
        }
    };
    let message = match err {
        CoreError::NotFound { .. } => err.to_string(),
        CoreError::AccessDenied(msg)
        | CoreError::ValidationFailed(msg)
        | CoreError::AlreadyExists(msg)
        | CoreError::Unauthorized(msg)
        | CoreError::Internal(msg) => msg.clone(),
    };
    (status, code, message)
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        SANITIZED_MESSAGE.to_string(),
    )
}

/// Name of the `uq_*` constraint a unique violation tripped, if any.
fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(PG_UNIQUE_VIOLATION) {
        return None;
    }
    db_err.constraint().filter(|name| name.starts_with("uq_"))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = self.parts();
        (status, Json(ErrorBody { error, code })).into_response()
    }
}
