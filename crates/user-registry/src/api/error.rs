//! API error handling
//!
//! This module contains the API error types and error handling logic.

use crate::error::UserRegistryError;

use super::responses::{ErrorResponse, ValidationErrorResponse};

/// API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (malformed id or paging parameters)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// One or more field validation rules violated
    #[error("Validation failed: {} rule(s) violated", errors.len())]
    Validation { errors: Vec<String> },

    /// Not found
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Unauthorized
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Internal server error
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a validation error carrying all violated-rule messages
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<UserRegistryError> for ApiError {
    fn from(error: UserRegistryError) -> Self {
        match error {
            UserRegistryError::Config { message } => Self::Internal { message },
            UserRegistryError::Storage { message } => Self::Internal { message },
            UserRegistryError::UserNotFound(id) => Self::NotFound {
                message: format!("User not found: {}", id),
            },
            UserRegistryError::Internal { message } => Self::Internal { message },
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::response::Json;

        match self {
            ApiError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),

            ApiError::Internal { ref message } => {
                // The internal detail goes to the log, never to the client.
                tracing::error!("Internal error reached the API boundary: {}", message);
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    status_code: status.as_u16(),
                });
                (status, body).into_response()
            }

            ref other => {
                let (status, message) = match other {
                    ApiError::BadRequest { message } => {
                        (StatusCode::BAD_REQUEST, message.clone())
                    }
                    ApiError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
                    ApiError::Unauthorized { message } => {
                        (StatusCode::UNAUTHORIZED, message.clone())
                    }
                    // Handled above
                    ApiError::Validation { .. } | ApiError::Internal { .. } => unreachable!(),
                };

                let body = Json(ErrorResponse {
                    error: other.to_string(),
                    message,
                    status_code: status.as_u16(),
                });
                (status, body).into_response()
            }
        }
    }
}
