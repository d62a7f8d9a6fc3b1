//! REST API for the User Registry
//!
//! This module contains the HTTP surface: request/response DTOs, handlers,
//! middleware, and router construction.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod requests;
pub mod responses;
pub mod server;

pub use error::ApiError;
pub use requests::{CreateUserRequest, PageQuery, UpdateUserRequest};
pub use responses::{ErrorResponse, HealthResponse, ProtectedResponse, ValidationErrorResponse};
pub use server::{AppState, UserRegistryApi};
