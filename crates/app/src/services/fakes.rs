//! In-memory port implementations shared by the service tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId, StateId, UserId};
use hbnb_domain::kind::EntityKind;
use hbnb_domain::place::Place;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};

#[derive(Default)]
struct Tables {
    states: HashMap<StateId, State>,
    cities: HashMap<CityId, City>,
    amenities: HashMap<AmenityId, Amenity>,
    users: HashMap<UserId, User>,
    places: HashMap<PlaceId, Place>,
}

/// Every repository backed by one set of hash maps. Clones share the maps.
#[derive(Clone, Default)]
pub(crate) struct FakeStore {
    tables: Arc<Mutex<Tables>>,
    lookups: Arc<AtomicUsize>,
}

impl FakeStore {
    /// Number of `get_by_id` calls served so far, across every repository.
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

macro_rules! fake_repository {
    ($trait:ident, $ty:ty, $id:ty, $table:ident $(, { $($extra:tt)* })?) => {
        impl $trait for FakeStore {
            fn create(&self, item: $ty) -> impl Future<Output = Result<$ty, HbnbError>> + Send {
                let mut tables = self.tables.lock().unwrap();
                tables.$table.insert(item.id, item.clone());
                async { Ok(item) }
            }

            fn get_by_id(
                &self,
                id: $id,
            ) -> impl Future<Output = Result<Option<$ty>, HbnbError>> + Send {
                self.lookups.fetch_add(1, Ordering::SeqCst);
                let tables = self.tables.lock().unwrap();
                let result = tables.$table.get(&id).cloned();
                async { Ok(result) }
            }

            fn get_all(&self) -> impl Future<Output = Result<Vec<$ty>, HbnbError>> + Send {
                let tables = self.tables.lock().unwrap();
                let result: Vec<$ty> = tables.$table.values().cloned().collect();
                async { Ok(result) }
            }

            fn update(&self, item: $ty) -> impl Future<Output = Result<$ty, HbnbError>> + Send {
                let mut tables = self.tables.lock().unwrap();
                tables.$table.insert(item.id, item.clone());
                async { Ok(item) }
            }

            fn delete(&self, id: $id) -> impl Future<Output = Result<(), HbnbError>> + Send {
                let mut tables = self.tables.lock().unwrap();
                tables.$table.remove(&id);
                async { Ok(()) }
            }

            $($($extra)*)?
        }
    };
}

fake_repository!(StateRepository, State, StateId, states);
fake_repository!(AmenityRepository, Amenity, AmenityId, amenities);
fake_repository!(UserRepository, User, UserId, users);
fake_repository!(CityRepository, City, CityId, cities, {
    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<City> = tables
            .cities
            .values()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
});
fake_repository!(PlaceRepository, Place, PlaceId, places, {
    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let tables = self.tables.lock().unwrap();
        let result: Vec<Place> = tables
            .places
            .values()
            .filter(|p| p.city_id == city_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
});

impl ObjectCounter for FakeStore {
    fn count(&self, kind: EntityKind) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let tables = self.tables.lock().unwrap();
        let n = match kind {
            EntityKind::Amenity => tables.amenities.len(),
            EntityKind::City => tables.cities.len(),
            EntityKind::Place => tables.places.len(),
            EntityKind::Review => 0,
            EntityKind::State => tables.states.len(),
            EntityKind::User => tables.users.len(),
        };
        async move { Ok(n as u64) }
    }
}
