//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Middleware for the User Registry API
//!
//! This module provides the API-key gate for the protected route and the
//! request-id and CORS cross-cutting middleware.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::error::ApiError;
use super::server::AppState;
use crate::config::SecurityConfig;

/// Check a request's API key against the configured pre-shared secret.
///
/// The header value must equal the secret exactly; the comparison is
/// case-sensitive. Absent or blank headers are reported as missing.
pub fn check_api_key(headers: &HeaderMap, security: &SecurityConfig) -> Result<(), ApiError> {
    let api_key = headers
        .get(&security.api_key_header)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if api_key.is_empty() {
        return Err(ApiError::unauthorized(format!(
            "Missing API key header: {}",
            security.api_key_header
        )));
    }

    if api_key != security.api_key {
        return Err(ApiError::unauthorized("Invalid API key"));
    }

    Ok(())
}

/// API-key authentication middleware
///
/// Applied only to the guarded route, ahead of the handler and its
/// validation pipeline. A caller presenting the exact secret proceeds as an
/// authenticated synthetic principal; everyone else gets 401.
pub async fn api_key_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_api_key(&headers, &state.config.security)?;

    tracing::debug!("API key accepted for {}", request.uri().path());
    Ok(next.run(request).await)
}

/// Request ID middleware
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", value);
    }

    response
}

/// CORS middleware
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert("Access-Control-Allow-Origin", "*".parse().unwrap());
    headers.insert(
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS".parse().unwrap(),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        "Content-Type, X-API-Key".parse().unwrap(),
    );

    response
}
