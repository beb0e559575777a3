//! User service: use-cases for managing users.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::user::{User, UserBuilder, UserPatch};

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_user(&self, id: UserId) -> Result<User, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Build and persist a new user.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` or `password` is missing,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, builder))]
    pub async fn create_user(&self, builder: UserBuilder) -> Result<User, HbnbError> {
        let user = builder.build()?;
        self.repo.create(user).await
    }

    /// Apply a patch to a user already loaded by the caller and persist it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, user, patch), fields(id = %user.id))]
    pub async fn update_user(&self, mut user: User, patch: UserPatch) -> Result<User, HbnbError> {
        user.apply(patch);
        self.repo.update(user).await
    }

    /// Delete a user (and the places they own) by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the user does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), HbnbError> {
        let user = self.get_user(id).await?;
        self.repo.delete(user.id).await
    }
}
