// ============================================================================
// Invex API - Auth Handlers
// File: crates/invex-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login)

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use invex_core::UserInfo;

use crate::error::ApiError;
use crate::state::AppState;

/// Register and login share the same payload. Missing fields deserialize
/// as empty strings so the service reports them as a validation error.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Register success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Login success response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
    pub token: String,
    pub expires_in: i64,
}

/// Register handler - POST /api/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(payload) = payload?;

    let result = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            user: result.user,
        }),
    ))
}

/// Login handler - POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;

    let result = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: result.user,
        token: result.access_token,
        expires_in: result.expires_in,
    }))
}
