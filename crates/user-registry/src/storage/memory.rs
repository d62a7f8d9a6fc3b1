//! In-memory storage implementation

use crate::error::UserRegistryResult;
use crate::storage::UserStore;
use crate::users::{NewUser, PagedUsers, User};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory user store
///
/// All operations, reads included, go through one exclusive lock so that
/// size, id assignment, and uniqueness are always observed consistently:
/// no read sees a half-applied write, no two concurrent creates assign the
/// same id. The lock is never held across an await point; hold time is
/// linear in the collection size.
pub struct MemoryUserStore {
    /// User records in insertion order
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserStore {
    /// Create a new empty store
    pub fn new() -> UserRegistryResult<Self> {
        Ok(Self {
            users: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Next id: `max(existing ids) + 1`, or 1 when empty.
    ///
    /// Computed fresh on every create, so deleting the max-id user frees
    /// its id for the next insert. That reuse is intentional; see DESIGN.md.
    fn next_id(users: &[User]) -> i64 {
        users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    /// Canonical stored form of an email address
    fn canonical_email(email: &str) -> String {
        email.trim().to_lowercase()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self, page: u64, page_size: u64) -> UserRegistryResult<PagedUsers> {
        let users = self.users.lock().await;

        let total_users = users.len() as u64;
        let total_pages = total_users.div_ceil(page_size);

        let start = (page - 1).saturating_mul(page_size);
        let page_users = if start >= total_users {
            Vec::new()
        } else {
            let end = (start + page_size).min(total_users);
            users[start as usize..end as usize].to_vec()
        };

        Ok(PagedUsers {
            users: page_users,
            page,
            page_size,
            total_users,
            total_pages,
        })
    }

    async fn get_user(&self, id: i64) -> UserRegistryResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> UserRegistryResult<User> {
        let mut users = self.users.lock().await;

        let user = User {
            id: Self::next_id(&users),
            name: new_user.name.trim().to_string(),
            age: new_user.age,
            email: Self::canonical_email(&new_user.email),
        };

        users.push(user.clone());
        tracing::debug!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update_user(&self, id: i64, new_user: NewUser) -> UserRegistryResult<Option<User>> {
        let mut users = self.users.lock().await;

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = new_user.name.trim().to_string();
                user.age = new_user.age;
                user.email = Self::canonical_email(&new_user.email);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_user(&self, id: i64) -> UserRegistryResult<bool> {
        let mut users = self.users.lock().await;

        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> UserRegistryResult<bool> {
        let needle = Self::canonical_email(email);
        let users = self.users.lock().await;

        Ok(users
            .iter()
            .any(|u| u.email == needle && Some(u.id) != exclude_id))
    }

    async fn count_users(&self) -> UserRegistryResult<usize> {
        let users = self.users.lock().await;
        Ok(users.len())
    }

    async fn health_check(&self) -> UserRegistryResult<bool> {
        // The store is healthy as long as the lock can be taken.
        let _ = self.users.lock().await;
        Ok(true)
    }
}
