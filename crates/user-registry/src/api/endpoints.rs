//! API endpoint handlers
//!
//! This module contains the API endpoint handlers for the user registry.
//!
//! Every handler follows the same discipline: structural checks on path and
//! paging parameters short-circuit with a rejection before the store is
//! touched; field rules and the duplicate-email check are then evaluated
//! without short-circuiting, so a rejection carries every violated rule at
//! once; only a fully valid request reaches the store.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use super::error::ApiError;
use super::requests::{CreateUserRequest, PageQuery, UpdateUserRequest};
use super::responses::{HealthResponse, ProtectedResponse};
use super::server::AppState;
use crate::users::{NewUser, PagedUsers, User};
use crate::validation;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let healthy = state.store.health_check().await?;
    let total_users = state.store.count_users().await?;

    Ok(Json(HealthResponse {
        status: if healthy {
            "healthy".to_string()
        } else {
            "unhealthy".to_string()
        },
        timestamp: chrono::Utc::now(),
        total_users,
    }))
}

/// List users endpoint
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedUsers>, ApiError> {
    let page = query.page.unwrap_or(1);
    let page_size = query
        .page_size
        .unwrap_or(state.config.pagination.default_page_size);

    if page == 0 {
        return Err(ApiError::bad_request("page must be greater than 0"));
    }

    let max_page_size = state.config.pagination.max_page_size;
    if page_size == 0 || page_size > max_page_size {
        return Err(ApiError::bad_request(format!(
            "pageSize must be between 1 and {}",
            max_page_size
        )));
    }

    let paged = state.store.list_users(page, page_size).await?;
    Ok(Json(paged))
}

/// Get user endpoint
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    check_id(id)?;

    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", id)))?;

    Ok(Json(user))
}

/// Create user endpoint
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let errors =
        collect_field_errors(&state, &request.name, request.age, &request.email, None).await?;
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let user = state
        .store
        .create_user(NewUser {
            name: request.name,
            age: request.age as u32,
            email: request.email,
        })
        .await?;

    tracing::info!("Created user {} ({})", user.id, user.email);

    let location = format!("{}/users/{}", state.config.api.base_path, user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(user),
    ))
}

/// Update user endpoint
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    check_id(id)?;

    // The target's own current email never counts as a duplicate.
    let errors =
        collect_field_errors(&state, &request.name, request.age, &request.email, Some(id)).await?;
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let updated = state
        .store
        .update_user(
            id,
            NewUser {
                name: request.name,
                age: request.age as u32,
                email: request.email,
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", id)))?;

    tracing::info!("Updated user {}", updated.id);
    Ok(Json(updated))
}

/// Delete user endpoint
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    check_id(id)?;

    let deleted = state.store.delete_user(id).await?;
    if !deleted {
        return Err(ApiError::not_found(format!("User not found: {}", id)));
    }

    tracing::info!("Deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Protected endpoint
///
/// The API-key gate runs as route middleware before this handler; reaching
/// it means the caller presented the exact pre-shared secret.
pub async fn protected(State(_state): State<AppState>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "You have accessed a protected endpoint".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Reject non-positive path ids before the store is consulted
fn check_id(id: i64) -> Result<(), ApiError> {
    if id <= 0 {
        return Err(ApiError::bad_request("id must be greater than 0"));
    }
    Ok(())
}

/// Evaluate every field rule, collecting the messages of all that fail.
///
/// The duplicate-email check only runs once the address has a valid shape;
/// the other rules are always evaluated.
async fn collect_field_errors(
    state: &AppState,
    name: &str,
    age: i64,
    email: &str,
    exclude_id: Option<i64>,
) -> Result<Vec<String>, ApiError> {
    let mut errors = Vec::new();

    if !validation::is_valid_name(name) {
        errors.push(format!(
            "Name must be between {} and {} characters",
            validation::NAME_MIN_CHARS,
            validation::NAME_MAX_CHARS
        ));
    }

    if !validation::is_valid_age(age) {
        errors.push(format!(
            "Age must be between {} and {}",
            validation::AGE_MIN,
            validation::AGE_MAX
        ));
    }

    if !validation::is_valid_email(email) {
        errors.push("Email must be a valid email address".to_string());
    } else if state.store.email_exists(email, exclude_id).await? {
        errors.push("Email address is already in use".to_string());
    }

    Ok(errors)
}
