//! API server implementation
//!
//! This module contains the API server implementation and router setup.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;

use super::endpoints::*;
use crate::config::UserRegistryConfig;
use crate::storage::UserStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// User store, constructed once at service start and injected here
    pub store: Arc<dyn UserStore>,

    /// Service configuration
    pub config: Arc<UserRegistryConfig>,
}

/// API server for the user registry
pub struct UserRegistryApi {
    /// Router with all routes and middleware attached
    router: Router,
}

impl UserRegistryApi {
    /// Create a new API server
    pub fn new(store: Arc<dyn UserStore>, config: Arc<UserRegistryConfig>) -> Self {
        // Ensure base path starts with '/'
        let base_path = if config.api.base_path.starts_with('/') {
            config.api.base_path.clone()
        } else {
            format!("/{}", config.api.base_path)
        };

        let state = AppState { store, config };
        let router = Self::create_router(state, &base_path);

        Self { router }
    }

    /// Create the router with all endpoints
    fn create_router(state: AppState, base_path: &str) -> Router {
        // The guarded route carries the API-key gate as route middleware so
        // the check runs before the handler. Static segments win over the
        // `{id}` capture, so `/users/protected` never reaches `get_user`.
        let protected_routes = Router::new()
            .route("/users/protected", get(protected))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                super::middleware::api_key_auth,
            ));

        let open_routes = Router::new()
            .route("/health", get(health_check))
            .route("/users", get(list_users).post(create_user))
            .route(
                "/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            );

        let api_routes = protected_routes
            .merge(open_routes)
            .layer(middleware::from_fn(
                super::middleware::request_id_middleware,
            ))
            .layer(middleware::from_fn(super::middleware::cors_middleware))
            .with_state(state);

        // Mount API routes under the base path
        Router::new().nest(base_path, api_routes)
    }

    /// Create the Axum app
    pub fn create_app(&self) -> Router {
        self.router.clone()
    }

    /// Get the router
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryUserStore;

    #[test]
    fn test_api_creation() {
        let store = Arc::new(MemoryUserStore::new().unwrap());
        let config = Arc::new(UserRegistryConfig::default());
        let api = UserRegistryApi::new(store, config);

        let _router = api.router();
    }

    #[test]
    fn test_base_path_gets_leading_slash() {
        let store = Arc::new(MemoryUserStore::new().unwrap());
        let mut config = UserRegistryConfig::default();
        config.api.base_path = "api".to_string();

        // Router construction panics on a path without a leading slash;
        // the constructor normalizes it first.
        let _api = UserRegistryApi::new(store, Arc::new(config));
    }
}
