//! # hbnb-adapter-storage-memory
//!
//! Volatile storage adapter: every repository port backed by hash maps
//! behind one mutex.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports`
//! - Mirror the relational adapter's cascade rules (state → cities → places,
//!   user → places) so both backends behave the same
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The lock is never held across an `.await`.

use std::collections::HashMap;
use std::future::{self, Future};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::kind::EntityKind;
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::time::Timestamp;
use hbnb_domain::user::User;

#[derive(Debug, Default)]
struct Tables {
    states: HashMap<StateId, State>,
    cities: HashMap<CityId, City>,
    amenities: HashMap<AmenityId, Amenity>,
    users: HashMap<UserId, User>,
    places: HashMap<PlaceId, Place>,
}

impl Tables {
    fn remove_places_where(&mut self, predicate: impl Fn(&Place) -> bool) {
        self.places.retain(|_, place| !predicate(place));
    }

    fn remove_city(&mut self, id: CityId) {
        if self.cities.remove(&id).is_some() {
            self.remove_places_where(|p| p.city_id == id);
        }
    }
}

/// Clone the matching rows, oldest first.
fn in_creation_order<'a, T: Clone + 'a>(
    rows: impl Iterator<Item = &'a T>,
    created_at: fn(&T) -> Timestamp,
) -> Vec<T> {
    let mut rows: Vec<T> = rows.cloned().collect();
    rows.sort_by_key(created_at);
    rows
}

/// In-memory storage shared by every clone.
///
/// One value implements all repository ports, so the same handle can be
/// passed to every service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // every mutation is a plain map operation, poisoning carries no meaning
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateRepository for InMemoryStorage {
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        self.lock().states.insert(state.id, state.clone());
        future::ready(Ok(state))
    }

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send {
        future::ready(Ok(self.lock().states.get(&id).cloned()))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send {
        future::ready(Ok(in_creation_order(
            self.lock().states.values(),
            |s: &State| s.created_at,
        )))
    }

    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        self.lock().states.insert(state.id, state.clone());
        future::ready(Ok(state))
    }

    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let mut tables = self.lock();
        if tables.states.remove(&id).is_some() {
            let cities: Vec<CityId> = tables
                .cities
                .values()
                .filter(|c| c.state_id == id)
                .map(|c| c.id)
                .collect();
            for city in cities {
                tables.remove_city(city);
            }
        }
        future::ready(Ok(()))
    }
}

impl CityRepository for InMemoryStorage {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        self.lock().cities.insert(city.id, city.clone());
        future::ready(Ok(city))
    }

    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
        future::ready(Ok(self.lock().cities.get(&id).cloned()))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        future::ready(Ok(in_creation_order(
            self.lock().cities.values(),
            |c: &City| c.created_at,
        )))
    }

    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let cities = in_creation_order(
            self.lock().cities.values().filter(|c| c.state_id == state_id),
            |c: &City| c.created_at,
        );
        future::ready(Ok(cities))
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        self.lock().cities.insert(city.id, city.clone());
        future::ready(Ok(city))
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.lock().remove_city(id);
        future::ready(Ok(()))
    }
}

impl AmenityRepository for InMemoryStorage {
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        self.lock().amenities.insert(amenity.id, amenity.clone());
        future::ready(Ok(amenity))
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
        future::ready(Ok(self.lock().amenities.get(&id).cloned()))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        future::ready(Ok(in_creation_order(
            self.lock().amenities.values(),
            |a: &Amenity| a.created_at,
        )))
    }

    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        self.lock().amenities.insert(amenity.id, amenity.clone());
        future::ready(Ok(amenity))
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.lock().amenities.remove(&id);
        future::ready(Ok(()))
    }
}

impl UserRepository for InMemoryStorage {
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        self.lock().users.insert(user.id, user.clone());
        future::ready(Ok(user))
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send {
        future::ready(Ok(self.lock().users.get(&id).cloned()))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send {
        future::ready(Ok(in_creation_order(
            self.lock().users.values(),
            |u: &User| u.created_at,
        )))
    }

    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send {
        self.lock().users.insert(user.id, user.clone());
        future::ready(Ok(user))
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let mut tables = self.lock();
        if tables.users.remove(&id).is_some() {
            tables.remove_places_where(|p| p.user_id == id);
        }
        future::ready(Ok(()))
    }
}

impl PlaceRepository for InMemoryStorage {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        self.lock().places.insert(place.id, place.clone());
        future::ready(Ok(place))
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        future::ready(Ok(self.lock().places.get(&id).cloned()))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        future::ready(Ok(in_creation_order(
            self.lock().places.values(),
            |p: &Place| p.created_at,
        )))
    }

    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let places = in_creation_order(
            self.lock().places.values().filter(|p| p.city_id == city_id),
            |p: &Place| p.created_at,
        );
        future::ready(Ok(places))
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        self.lock().places.insert(place.id, place.clone());
        future::ready(Ok(place))
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.lock().places.remove(&id);
        future::ready(Ok(()))
    }
}

impl ObjectCounter for InMemoryStorage {
    fn count(&self, kind: EntityKind) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let tables = self.lock();
        let len = match kind {
            EntityKind::Amenity => tables.amenities.len(),
            EntityKind::City => tables.cities.len(),
            EntityKind::Place => tables.places.len(),
            // no review resource exists, nothing ever stores one here
            EntityKind::Review => 0,
            EntityKind::State => tables.states.len(),
            EntityKind::User => tables.users.len(),
        };
        tracing::trace!(%kind, len, "counted objects");
        future::ready(Ok(len as u64))
    }
}
