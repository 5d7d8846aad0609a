//! Handlers for the `/auth` resource (signup, login).

use axum::extract::State;
use axum::Json;
use cardify_core::error::CoreError;
use cardify_db::models::user::{CreateUser, User, UserResponse};
use cardify_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::response::{Created, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new account and sign it in. Returns 201 with an access token.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Created<AuthResponse>> {
    let email = input.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::ValidationFailed(
            "A valid email is required".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::ValidationFailed(msg)))?;

    if UserRepo::exists_by_email(&state.pool, &email).await? {
        return Err(AppError::Core(CoreError::AlreadyExists(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| internal(format!("Password hashing error: {e}")))?;

    // A concurrent signup for the same email still loses on uq_users_email (409).
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User signed up");

    let response = create_auth_response(&state, &user)?;
    Ok(Created(response))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<DataResponse<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid());
    }

    tracing::info!(user_id = user.id, "User logged in");

    let response = create_auth_response(&state, &user)?;
    Ok(DataResponse::new(response))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn internal(message: String) -> AppError {
    AppError::Core(CoreError::Internal(message))
}

fn create_auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| internal(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expiry_mins * 60,
        user: UserResponse::from(user),
    })
}
