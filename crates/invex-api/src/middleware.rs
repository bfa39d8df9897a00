//! Bearer token guard for the product routes

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Pass-through unless `require_token` is set. On success the decoded
/// claims are attached to the request extensions.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.require_token {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = state.jwt_service.validate_token(token).map_err(|e| {
        tracing::debug!("Bearer token rejected: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    tracing::debug!("Authenticated request for user {}", claims.sub);
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
