//! HTTP error mapping

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use invex_core::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, "ValidationError", msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "ConflictError", msg)
            }
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "AuthError", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFoundError", msg)
            }
            ApiError::Internal(msg) => {
                // Detail stays in the logs
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "Server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type,
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => ApiError::Validation(msg),
            DomainError::EmailAlreadyExists(_) => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            DomainError::ProductAlreadyExists(key) => {
                ApiError::Conflict(format!("Product {} already exists", key))
            }
            DomainError::InvalidCredentials => {
                ApiError::Unauthorized("Incorrect email or password".to_string())
            }
            DomainError::ProductNotFound(key) => {
                ApiError::NotFound(format!("Product {} not found", key))
            }
            DomainError::PasswordHashError(_)
            | DomainError::TokenGenerationError(_)
            | DomainError::DatabaseError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let cases = [
            (DomainError::ValidationError("x".into()), StatusCode::BAD_REQUEST),
            (DomainError::EmailAlreadyExists("a@b.c".into()), StatusCode::CONFLICT),
            (DomainError::ProductAlreadyExists("P1".into()), StatusCode::CONFLICT),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DomainError::ProductNotFound("P1".into()), StatusCode::NOT_FOUND),
            (DomainError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::PasswordHashError("salt".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError::from(DomainError::DatabaseError("password authentication failed".into()));
        assert!(matches!(err, ApiError::Internal(ref detail) if detail.contains("password authentication")));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
