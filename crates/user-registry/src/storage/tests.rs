//! Storage tests

use super::*;
use crate::users::NewUser;
use std::sync::Arc;

fn new_user(name: &str, age: u32, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        age,
        email: email.to_string(),
    }
}

#[cfg(test)]
mod memory_tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_creation() {
        let store = MemoryUserStore::new();
        assert!(store.is_ok());
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let store = MemoryUserStore::new().unwrap();

        let created = store
            .create_user(new_user("John Doe", 30, "john@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_user(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));

        let absent = store.get_user(999).await.unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn test_create_canonicalizes_fields() {
        let store = MemoryUserStore::new().unwrap();

        let created = store
            .create_user(new_user("  John Doe  ", 30, "  John.Doe@Example.COM "))
            .await
            .unwrap();

        assert_eq!(created.name, "John Doe");
        assert_eq!(created.email, "john.doe@example.com");
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let store = MemoryUserStore::new().unwrap();

        for i in 1..=5 {
            let user = store
                .create_user(new_user("User Name", 30, &format!("user{}@example.com", i)))
                .await
                .unwrap();
            assert_eq!(user.id, i);
        }
    }

    #[tokio::test]
    async fn reassigns_freed_max_id_after_delete() {
        let store = MemoryUserStore::new().unwrap();

        store
            .create_user(new_user("First User", 30, "first@example.com"))
            .await
            .unwrap();
        let second = store
            .create_user(new_user("Second User", 40, "second@example.com"))
            .await
            .unwrap();
        assert_eq!(second.id, 2);

        // Deleting the max-id user frees its id: next id is computed as
        // max+1 on every create, so the new user gets id 2 again.
        assert!(store.delete_user(second.id).await.unwrap());
        let third = store
            .create_user(new_user("Third User", 50, "third@example.com"))
            .await
            .unwrap();
        assert_eq!(third.id, 2);
    }

    #[tokio::test]
    async fn test_email_exists_is_case_insensitive() {
        let store = MemoryUserStore::new().unwrap();

        store
            .create_user(new_user("John Doe", 30, "john.doe@example.com"))
            .await
            .unwrap();

        assert!(store
            .email_exists("JOHN.DOE@EXAMPLE.COM", None)
            .await
            .unwrap());
        assert!(store
            .email_exists(" john.doe@example.com ", None)
            .await
            .unwrap());
        assert!(!store.email_exists("other@example.com", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_email_exists_excludes_given_id() {
        let store = MemoryUserStore::new().unwrap();

        let user = store
            .create_user(new_user("John Doe", 30, "john@example.com"))
            .await
            .unwrap();

        assert!(!store
            .email_exists("john@example.com", Some(user.id))
            .await
            .unwrap());
        assert!(store
            .email_exists("john@example.com", Some(user.id + 1))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_pagination_second_page() {
        let store = MemoryUserStore::new().unwrap();

        for i in 1..=3 {
            store
                .create_user(new_user("User Name", 30, &format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let page = store.list_users(2, 2).await.unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].id, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 2);
        assert_eq!(page.total_users, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_pagination_out_of_range_page_is_empty() {
        let store = MemoryUserStore::new().unwrap();

        for i in 1..=3 {
            store
                .create_user(new_user("User Name", 30, &format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let page = store.list_users(99, 10).await.unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.total_users, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_pagination_empty_store() {
        let store = MemoryUserStore::new().unwrap();

        let page = store.list_users(1, 10).await.unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.total_users, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_position() {
        let store = MemoryUserStore::new().unwrap();

        store
            .create_user(new_user("First User", 30, "first@example.com"))
            .await
            .unwrap();
        store
            .create_user(new_user("Second User", 40, "second@example.com"))
            .await
            .unwrap();

        let updated = store
            .update_user(1, new_user("  Renamed  ", 31, "Renamed@Example.com"))
            .await
            .unwrap()
            .expect("user 1 exists");
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, "renamed@example.com");

        // Still the first record in listing order
        let page = store.list_users(1, 10).await.unwrap();
        assert_eq!(page.users[0].id, 1);
        assert_eq!(page.users[0].name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_absent_user_returns_none() {
        let store = MemoryUserStore::new().unwrap();

        let result = store
            .update_user(42, new_user("Nobody", 30, "nobody@example.com"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_user() {
        let store = MemoryUserStore::new().unwrap();

        let user = store
            .create_user(new_user("John Doe", 30, "john@example.com"))
            .await
            .unwrap();

        assert!(store.delete_user(user.id).await.unwrap());
        assert!(!store.delete_user(user.id).await.unwrap());
        assert!(store.get_user(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(MemoryUserStore::new().unwrap());

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create_user(NewUser {
                        name: "Concurrent User".to_string(),
                        age: 30,
                        email: format!("concurrent{}@example.com", i),
                    })
                    .await
                    .unwrap()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50, "every create must receive a distinct id");
        assert_eq!(store.count_users().await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = MemoryUserStore::new().unwrap();
        assert!(store.health_check().await.unwrap());
    }
}
