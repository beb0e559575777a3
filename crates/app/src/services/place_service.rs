//! Place service: use-cases for managing the places of a city.

use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::PlaceId;
use hbnb_domain::place::{Place, PlaceBuilder, PlacePatch};

use crate::ports::{PlaceRepository, UserRepository};

/// Application service for place CRUD operations.
///
/// Needs read access to users: a place can only be created for an existing
/// owner.
pub struct PlaceService<R, U> {
    repo: R,
    users: U,
}

impl<R, U> PlaceService<R, U>
where
    R: PlaceRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, users: U) -> Self {
        Self { repo, users }
    }

    /// List the places of a city.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self, city: &City) -> Result<Vec<Place>, HbnbError> {
        self.repo.find_by_city_id(city.id).await
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Build a place inside `city` and persist it.
    ///
    /// Checks run in order: `user_id` present, owner exists, `name` present.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `user_id` or `name` is missing,
    /// [`HbnbError::NotFound`] if the owner does not exist, or a storage
    /// error propagated from a repository.
    #[tracing::instrument(skip(self, city, builder), fields(city_id = %city.id))]
    pub async fn create_place(
        &self,
        city: &City,
        builder: PlaceBuilder,
    ) -> Result<Place, HbnbError> {
        let user_id = builder.user()?;
        if self.users.get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError {
                entity: "User",
                id: user_id.to_string(),
            }
            .into());
        }
        let place = builder.city_id(city.id).build()?;
        self.repo.create(place).await
    }

    /// Apply a patch to a place already loaded by the caller and persist it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, place, patch), fields(id = %place.id))]
    pub async fn update_place(
        &self,
        mut place: Place,
        patch: PlacePatch,
    ) -> Result<Place, HbnbError> {
        place.apply(patch);
        self.repo.update(place).await
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        let place = self.get_place(id).await?;
        self.repo.delete(place.id).await
    }
}
