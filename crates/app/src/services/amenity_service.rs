//! Amenity service: use-cases for managing amenities.

use hbnb_domain::amenity::{Amenity, AmenityBuilder, AmenityPatch};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::AmenityId;

use crate::ports::AmenityRepository;

/// Application service for amenity CRUD operations.
pub struct AmenityService<R> {
    repo: R,
}

impl<R: AmenityRepository> AmenityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all amenities.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, HbnbError> {
        self.repo.get_all().await
    }

    /// Look up an amenity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Amenity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Build and persist a new amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, builder))]
    pub async fn create_amenity(&self, builder: AmenityBuilder) -> Result<Amenity, HbnbError> {
        let amenity = builder.build()?;
        self.repo.create(amenity).await
    }

    /// Apply a patch to a amenity already loaded by the caller and persist it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, amenity, patch), fields(id = %amenity.id))]
    pub async fn update_amenity(
        &self,
        mut amenity: Amenity,
        patch: AmenityPatch,
    ) -> Result<Amenity, HbnbError> {
        amenity.apply(patch);
        self.repo.update(amenity).await
    }

    /// Delete an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the amenity does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        let amenity = self.get_amenity(id).await?;
        self.repo.delete(amenity.id).await
    }
}
