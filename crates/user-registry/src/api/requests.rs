//! API request structures
//!
//! This module contains all the request structures for the API endpoints.

use serde::{Deserialize, Serialize};

/// Create user request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,

    /// Age in years
    pub age: i64,

    /// Email address
    pub email: String,
}

/// Update user request
///
/// Same field set as [`CreateUserRequest`]; the target id travels in the
/// path, never in the body.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// Display name
    pub name: String,

    /// Age in years
    pub age: i64,

    /// Email address
    pub email: String,
}

/// Page selection query for the user listing
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Requested page (1-based)
    pub page: Option<u64>,

    /// Requested page size
    pub page_size: Option<u64>,
}
