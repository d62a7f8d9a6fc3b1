//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Error handling for the User Registry
//!
//! This module provides error types and result aliases for the user registry.

use thiserror::Error;

/// Result type for user registry operations
pub type UserRegistryResult<T> = Result<T, UserRegistryError>;

/// User Registry error types
#[derive(Error, Debug)]
pub enum UserRegistryError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Storage error
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl UserRegistryError {
    /// Create a configuration error
    pub fn config(message: &str) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a storage error
    pub fn storage(message: &str) -> Self {
        Self::Storage {
            message: message.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: &str) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }
}
