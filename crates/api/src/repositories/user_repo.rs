//! User persistence.
//!
//! Handlers depend on the [`UserRepository`] trait only. [`InMemoryUserRepo`]
//! backs the demo server and the integration tests.

use async_trait::async_trait;
use chrono::Utc;
use courier_core::{paginate, CoreError};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::{NewUser, UpdateUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// One page of users in creation order, plus the total user count.
    async fn list_page(&self, page: u32, limit: u32) -> Result<(Vec<User>, u64), CoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError>;

    async fn create(&self, input: NewUser) -> Result<User, CoreError>;

    /// Apply the present fields of `input`. `None` if no such user.
    async fn update(&self, id: Uuid, input: UpdateUser) -> Result<Option<User>, CoreError>;

    /// Returns `false` if no such user existed.
    async fn delete(&self, id: Uuid) -> Result<bool, CoreError>;
}

/// Users kept in a vector, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn list_page(&self, page: u32, limit: u32) -> Result<(Vec<User>, u64), CoreError> {
        let users = self.users.read().await;
        let slice = paginate(users.iter(), page, limit)?;
        Ok((slice.items.into_iter().cloned().collect(), slice.total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, input: NewUser) -> Result<User, CoreError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            created_at: now,
            updated_at: now,
        };

        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: Uuid, input: UpdateUser) -> Result<Option<User>, CoreError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(username) = input.username {
            user.username = username;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(n: usize) -> NewUser {
        NewUser {
            username: format!("user_{n:04}"),
            email: format!("user{n}@example.com"),
        }
    }

    #[tokio::test]
    async fn list_page_reports_total_and_slice() {
        let repo = InMemoryUserRepo::new();
        for n in 0..12 {
            repo.create(new_user(n)).await.unwrap();
        }

        let (items, total) = repo.list_page(2, 5).await.unwrap();

        assert_eq!(total, 12);
        let names: Vec<_> = items.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["user_0005", "user_0006", "user_0007", "user_0008", "user_0009"]);
    }

    #[tokio::test]
    async fn list_page_past_the_end_keeps_total() {
        let repo = InMemoryUserRepo::new();
        for n in 0..3 {
            repo.create(new_user(n)).await.unwrap();
        }

        let (items, total) = repo.list_page(4, 2).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let repo = InMemoryUserRepo::new();
        let created = repo.create(new_user(1)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateUser {
                    username: None,
                    email: Some("new@example.com".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.username, created.username);
        assert_eq!(updated.email, "new@example.com");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_user_was_removed() {
        let repo = InMemoryUserRepo::new();
        let created = repo.create(new_user(1)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
