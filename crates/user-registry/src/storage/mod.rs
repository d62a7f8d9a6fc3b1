//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Storage backends for the User Registry
//!
//! This module provides the store abstraction the request handlers are
//! written against, and the in-memory implementation.

pub mod memory;

#[cfg(test)]
mod tests;

use crate::error::UserRegistryResult;
use crate::users::{NewUser, PagedUsers, User};
use async_trait::async_trait;

/// User store trait
///
/// Mutating operations trust the caller: field validation and duplicate
/// checking happen in the handlers before the store is touched, so the store
/// stays a minimal data-mutation primitive. Every operation is atomic with
/// respect to every other.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// List one page of users.
    ///
    /// The slice `[(page-1)*page_size, page*page_size)` clipped to the
    /// collection bounds; a page past the end yields an empty list with
    /// correct totals, never an error. Callers enforce `page >= 1` and the
    /// page-size bounds.
    async fn list_users(&self, page: u64, page_size: u64) -> UserRegistryResult<PagedUsers>;

    /// Retrieve a user by id
    async fn get_user(&self, id: i64) -> UserRegistryResult<Option<User>>;

    /// Create a user, assigning the next id
    async fn create_user(&self, new_user: NewUser) -> UserRegistryResult<User>;

    /// Overwrite an existing user's fields in place, preserving its id
    async fn update_user(&self, id: i64, new_user: NewUser) -> UserRegistryResult<Option<User>>;

    /// Delete a user, reporting whether a record was removed
    async fn delete_user(&self, id: i64) -> UserRegistryResult<bool>;

    /// Check whether an email is taken, case-insensitively.
    ///
    /// A record whose id equals `exclude_id` is never considered a match,
    /// so an update can keep its own current address.
    async fn email_exists(&self, email: &str, exclude_id: Option<i64>)
        -> UserRegistryResult<bool>;

    /// Number of users currently stored
    async fn count_users(&self) -> UserRegistryResult<usize>;

    /// Health check
    async fn health_check(&self) -> UserRegistryResult<bool>;
}

// Re-export storage implementations
pub use memory::MemoryUserStore;
