//! City service: use-cases for managing the cities of a state.

use hbnb_domain::city::{City, CityBuilder, CityPatch};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::CityId;
use hbnb_domain::state::State;

use crate::ports::CityRepository;

/// Application service for city CRUD operations.
///
/// Operations scoped to a state take the [`State`] itself, so the caller has
/// already proven it exists.
pub struct CityService<R> {
    repo: R,
}

impl<R: CityRepository> CityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_cities(&self, state: &State) -> Result<Vec<City>, HbnbError> {
        self.repo.find_by_state_id(state.id).await
    }

    /// Look up a city by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "City",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Build a city inside `state` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self, state, builder), fields(state_id = %state.id))]
    pub async fn create_city(
        &self,
        state: &State,
        builder: CityBuilder,
    ) -> Result<City, HbnbError> {
        let city = builder.state_id(state.id).build()?;
        self.repo.create(city).await
    }

    /// Apply a patch to a city already loaded by the caller and persist it.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, city, patch), fields(id = %city.id))]
    pub async fn update_city(&self, mut city: City, patch: CityPatch) -> Result<City, HbnbError> {
        city.apply(patch);
        self.repo.update(city).await
    }

    /// Delete a city (and its places) by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), HbnbError> {
        let city = self.get_city(id).await?;
        self.repo.delete(city.id).await
    }
}
