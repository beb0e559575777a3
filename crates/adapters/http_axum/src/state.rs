//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::stats_service::StatsService;
use hbnb_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types and the object counter to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR, CR, AR, UR, PR, OC> {
    /// State CRUD service.
    pub state_service: Arc<StateService<SR>>,
    /// City CRUD service, scoped by state.
    pub city_service: Arc<CityService<CR>>,
    /// Amenity CRUD service.
    pub amenity_service: Arc<AmenityService<AR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Place CRUD service, scoped by city and owned by a user.
    pub place_service: Arc<PlaceService<PR, UR>>,
    /// Per-kind object counts.
    pub stats_service: Arc<StatsService<OC>>,
}

impl<SR, CR, AR, UR, PR, OC> Clone for AppState<SR, CR, AR, UR, PR, OC> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            city_service: Arc::clone(&self.city_service),
            amenity_service: Arc::clone(&self.amenity_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            stats_service: Arc::clone(&self.stats_service),
        }
    }
}

impl<SR, CR, AR, UR, PR, OC> AppState<SR, CR, AR, UR, PR, OC>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        state_service: StateService<SR>,
        city_service: CityService<CR>,
        amenity_service: AmenityService<AR>,
        user_service: UserService<UR>,
        place_service: PlaceService<PR, UR>,
        stats_service: StatsService<OC>,
    ) -> Self {
        Self {
            state_service: Arc::new(state_service),
            city_service: Arc::new(city_service),
            amenity_service: Arc::new(amenity_service),
            user_service: Arc::new(user_service),
            place_service: Arc::new(place_service),
            stats_service: Arc::new(stats_service),
        }
    }
}
