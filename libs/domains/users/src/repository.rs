use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence.
///
/// Implementations are pure persistence delegates: uniqueness and
/// existence rules live in the service layer. Absence is reported
/// through `Option`/`bool` return values, not errors.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, in no guaranteed order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by exact (case-sensitive) email match
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Persist a new user
    async fn create(&self, user: User) -> UserResult<()>;

    /// Persist the full state of an existing user
    async fn update(&self, user: User) -> UserResult<()>;

    /// Delete a user by ID, returning whether a record was removed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;
        tracing::debug!(user_id = %user.id, "Storing user");
        users.insert(user.id, user);
        Ok(())
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let mut users = self.users.write().await;
        tracing::debug!(user_id = %user.id, "Replacing user");
        users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let repo = InMemoryUserRepository::new();
        let u = user("jane@example.com");

        repo.create(u.clone()).await.unwrap();

        let fetched = repo.get_by_id(u.id).await.unwrap();
        assert_eq!(fetched, Some(u));
    }

    #[tokio::test]
    async fn test_get_by_email_is_exact_match() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("jane@example.com")).await.unwrap();

        assert!(
            repo.get_by_email("jane@example.com")
                .await
                .unwrap()
                .is_some()
        );
        // Case differences are distinct emails
        assert!(
            repo.get_by_email("Jane@Example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_replaces_stored_state() {
        let repo = InMemoryUserRepository::new();
        let mut u = user("jane@example.com");
        repo.create(u.clone()).await.unwrap();

        u.first_name = "Janet".to_string();
        repo.update(u.clone()).await.unwrap();

        let fetched = repo.get_by_id(u.id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Janet");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_record_existed() {
        let repo = InMemoryUserRepository::new();
        let u = user("jane@example.com");
        repo.create(u.clone()).await.unwrap();

        assert!(repo.delete(u.id).await.unwrap());
        assert!(!repo.delete(u.id).await.unwrap());
        assert!(repo.get_by_id(u.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_returns_all_users() {
        let repo = InMemoryUserRepository::new();
        repo.create(user("a@example.com")).await.unwrap();
        repo.create(user("b@example.com")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
