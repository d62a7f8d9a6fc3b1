//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Configuration management for the User Registry
//!
//! This module provides configuration structures and validation for
//! the user registry service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistryConfig {
    /// API configuration
    pub api: ApiConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Pagination configuration
    pub pagination: PaginationConfig,
}

impl Default for UserRegistryConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            security: SecurityConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API host
    pub host: String,

    /// API port
    pub port: u16,

    /// API base path
    pub base_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_path: "/api".to_string(),
        }
    }
}

/// Security configuration
///
/// The pre-shared secret gating the protected route. The default is a
/// development value; a production deployment overrides it through the
/// config file or the `USER_REGISTRY__SECURITY__API_KEY` environment
/// variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// API key header name
    pub api_key_header: String,

    /// Pre-shared API key, compared by exact string equality
    pub api_key: String,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            api_key_header: "X-API-Key".to_string(),
            api_key: "your-secret-api-key-12345".to_string(),
        }
    }
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the client does not send one
    pub default_page_size: u64,

    /// Largest page size a client may request
    pub max_page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

impl UserRegistryConfig {
    /// Load configuration from file
    pub fn from_file(path: &PathBuf) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("USER_REGISTRY"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from multiple sources with precedence
    pub fn from_sources(
        config_file: Option<&PathBuf>,
        env_prefix: &str,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add defaults first
        builder = builder.add_source(config::File::from_str(
            &Self::generate_example(),
            config::FileFormat::Toml,
        ));

        // Add config file if provided
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path.as_ref()));
        }

        // Add environment variables with separator
        builder = builder.add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        settings.try_deserialize()
    }

    /// Load configuration with defaults
    pub fn load_with_defaults() -> Result<Self, config::ConfigError> {
        let config_paths = vec![
            PathBuf::from("config/user-registry.toml"),
            PathBuf::from("user-registry.toml"),
        ];

        for path in config_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Self::from_sources(None, "USER_REGISTRY")
    }

    /// Generate example configuration
    pub fn generate_example() -> String {
        r#"# User Registry Configuration Example
# This file shows all available configuration options

[api]
host = "127.0.0.1"
port = 8080
base_path = "/api"

[security]
api_key_header = "X-API-Key"
api_key = "your-secret-api-key-12345"

[pagination]
default_page_size = 10
max_page_size = 100
"#
        .to_string()
    }

    /// Validate configuration with detailed error reporting
    pub fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        self.validate_api(&mut errors);
        self.validate_security(&mut errors);
        self.validate_pagination(&mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Configuration validation failed with {} error(s):\n{}",
                errors.len(),
                errors.join("\n")
            ))
        }
    }

    /// Validate API configuration
    fn validate_api(&self, errors: &mut Vec<String>) {
        if self.api.host.is_empty() {
            errors.push("api.host: cannot be empty".to_string());
        }

        if self.api.port == 0 {
            errors.push("api.port: must be greater than 0".to_string());
        }

        if self.api.base_path.is_empty() {
            errors.push("api.base_path: cannot be empty".to_string());
        }

        if !self.api.base_path.starts_with('/') {
            errors.push("api.base_path: must start with '/'".to_string());
        }
    }

    /// Validate security configuration
    fn validate_security(&self, errors: &mut Vec<String>) {
        if self.security.api_key_header.is_empty() {
            errors.push("security.api_key_header: cannot be empty".to_string());
        }

        if self.security.api_key.is_empty() {
            errors.push("security.api_key: cannot be empty".to_string());
        }
    }

    /// Validate pagination configuration
    fn validate_pagination(&self, errors: &mut Vec<String>) {
        if self.pagination.max_page_size == 0 {
            errors.push("pagination.max_page_size: must be greater than 0".to_string());
        }

        if self.pagination.default_page_size == 0 {
            errors.push("pagination.default_page_size: must be greater than 0".to_string());
        }

        if self.pagination.default_page_size > self.pagination.max_page_size {
            errors.push(
                "pagination.default_page_size: must not exceed pagination.max_page_size"
                    .to_string(),
            );
        }
    }
}
