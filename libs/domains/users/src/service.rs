use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::id::IdGenerator;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic.
///
/// Owns the uniqueness and existence rules; the repository is a pure
/// persistence delegate. Duplicate checks are check-then-act: the race
/// window under concurrent writers is accepted, with the storage unique
/// index as the backstop.
#[derive(Clone)]
pub struct UserService<R: UserRepository, G: IdGenerator> {
    repository: Arc<R>,
    id_generator: Arc<G>,
}

impl<R: UserRepository, G: IdGenerator> UserService<R, G> {
    pub fn new(repository: R, id_generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            id_generator: Arc::new(id_generator),
        }
    }

    /// List all users.
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user and return its freshly generated id.
    ///
    /// Fails with `DuplicateEmail` if any user already holds the email
    /// (exact string equality).
    pub async fn create_user(&self, input: CreateUser) -> UserResult<Uuid> {
        if self.repository.get_by_email(&input.email).await?.is_some() {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let id = self.id_generator.generate();
        let user = User::new(id, input);
        self.repository.create(user).await?;

        tracing::info!(user_id = %id, "Created user");
        Ok(id)
    }

    /// Partially update a user.
    ///
    /// Provided fields replace current values (an empty string counts as
    /// provided); absent fields are left unchanged. Changing the email to
    /// one held by another user fails with `DuplicateEmail`; re-submitting
    /// the current email is a no-op for the duplicate check.
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<()> {
        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        if let Some(ref new_email) = input.email {
            if *new_email != user.email
                && self.repository.get_by_email(new_email).await?.is_some()
            {
                return Err(UserError::DuplicateEmail(new_email.clone()));
            }
        }

        user.apply_update(input);
        self.repository.update(user).await?;

        tracing::info!(user_id = %id, "Updated user");
        Ok(())
    }

    /// Delete a user permanently.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}
