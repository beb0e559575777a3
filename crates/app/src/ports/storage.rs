//! Storage port: repository traits for persistence.
//!
//! Every repository writes through: once a returned future resolves `Ok`, the
//! change is committed. Deleting a parent also removes what it owns (a
//! state's cities, a city's or user's places).

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    /// Insert a new state.
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Get a state by its identifier.
    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    /// Get all states.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    /// Overwrite an existing state.
    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state and its cities.
    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`City`]s.
pub trait CityRepository {
    /// Insert a new city.
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Get a city by its identifier.
    fn get_by_id(&self, id: CityId)
    -> impl Future<Output = Result<Option<City>, HbnbError>> + Send;

    /// Get all cities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Get every city belonging to a state.
    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;

    /// Overwrite an existing city.
    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send;

    /// Delete a city and its places.
    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Amenity`]s.
pub trait AmenityRepository {
    /// Insert a new amenity.
    fn create(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Get an amenity by its identifier.
    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    /// Get all amenities.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    /// Overwrite an existing amenity.
    fn update(&self, amenity: Amenity)
    -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    /// Delete an amenity.
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Insert a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Get a user by its identifier.
    fn get_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    /// Get all users.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    /// Overwrite an existing user.
    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Delete a user and their places.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s.
pub trait PlaceRepository {
    /// Insert a new place.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Get a place by its identifier.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Get all places.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Get every place located in a city.
    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Overwrite an existing place.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Delete a place.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}
