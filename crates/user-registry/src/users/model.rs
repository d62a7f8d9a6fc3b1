//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! User model definitions

use serde::{Deserialize, Serialize};

/// User record
///
/// Records are owned exclusively by the store; everything handed out is a
/// clone of the canonical copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User ID (positive, unique)
    pub id: i64,

    /// Display name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Email address, stored trimmed and lower-cased
    pub email: String,
}

/// Field set for a user about to be created or overwritten
///
/// Carries already-validated fields; canonicalization (trimming, email
/// lower-casing) happens in the store when the record is written.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Email address
    pub email: String,
}

/// One page of users
///
/// Computed fresh on every read; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedUsers {
    /// Users on this page
    pub users: Vec<User>,

    /// Requested page (1-based)
    pub page: u64,

    /// Requested page size
    pub page_size: u64,

    /// Total number of users in the store
    pub total_users: u64,

    /// Total number of pages at this page size
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_users_wire_shape() {
        let page = PagedUsers {
            users: vec![User {
                id: 1,
                name: "John Doe".to_string(),
                age: 30,
                email: "john@example.com".to_string(),
            }],
            page: 1,
            page_size: 10,
            total_users: 1,
            total_pages: 1,
        };

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalUsers"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["users"][0]["id"], 1);
    }
}
