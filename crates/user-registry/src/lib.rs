//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! User Registry service
//!
//! A REST service exposing CRUD operations over a single in-memory user
//! collection, with field validation, pagination, and an API-key gate on
//! one protected route.

pub mod api;
pub mod config;
pub mod error;
pub mod storage;
pub mod users;
pub mod validation;

// Re-export main types
pub use api::{ApiError, UserRegistryApi};
pub use config::UserRegistryConfig;
pub use error::{UserRegistryError, UserRegistryResult};
pub use storage::{MemoryUserStore, UserStore};
pub use users::{NewUser, PagedUsers, User};

use std::sync::Arc;

/// User Registry version
pub const USER_REGISTRY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User Registry name
pub const USER_REGISTRY_NAME: &str = "user-registry";

/// Initialize the user registry
pub async fn init_user_registry(config: UserRegistryConfig) -> UserRegistryResult<UserRegistry> {
    UserRegistry::new(config).await
}

/// Shutdown the user registry
pub async fn shutdown_user_registry(registry: UserRegistry) -> UserRegistryResult<()> {
    registry.shutdown().await
}

/// User Registry
///
/// Owns the store for the lifetime of the process: constructed once at
/// service start, handed to the API layer, torn down with the process.
pub struct UserRegistry {
    /// Configuration
    config: UserRegistryConfig,
    /// User store
    store: Arc<dyn UserStore>,
}

impl UserRegistry {
    /// Create a new user registry
    pub async fn new(config: UserRegistryConfig) -> UserRegistryResult<Self> {
        let store = MemoryUserStore::new()?;

        Ok(Self {
            config,
            store: Arc::new(store),
        })
    }

    /// Get the store handle
    pub fn store(&self) -> Arc<dyn UserStore> {
        self.store.clone()
    }

    /// Get the configuration
    pub fn config(&self) -> &UserRegistryConfig {
        &self.config
    }

    /// Health check
    pub async fn health_check(&self) -> UserRegistryResult<bool> {
        self.store.health_check().await
    }

    /// Shutdown the user registry
    pub async fn shutdown(self) -> UserRegistryResult<()> {
        tracing::info!("User registry shutdown completed");
        Ok(())
    }
}
