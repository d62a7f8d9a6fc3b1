//! API response structures
//!
//! This module contains all the response structures for the API endpoints.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,

    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Number of users currently stored
    pub total_users: usize,
}

/// Protected route response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProtectedResponse {
    /// Response message
    pub message: String,

    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type
    pub error: String,

    /// Error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Field validation error response
///
/// Carries every violated rule for the request, in evaluation order, never
/// just the first.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Violated-rule messages
    pub errors: Vec<String>,
}
