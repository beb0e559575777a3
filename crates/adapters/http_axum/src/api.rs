//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::error::{HbnbError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api/v1` sub-router.
pub fn routes<SR, CR, AR, UR, PR, OC>() -> Router<AppState<SR, CR, AR, UR, PR, OC>>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    Router::new()
        // Index
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<SR, CR, AR, UR, PR, OC>))
        // States
        .route(
            "/states",
            get(states::list::<SR, CR, AR, UR, PR, OC>)
                .post(states::create::<SR, CR, AR, UR, PR, OC>),
        )
        .route(
            "/states/{state_id}",
            get(states::get::<SR, CR, AR, UR, PR, OC>)
                .put(states::update::<SR, CR, AR, UR, PR, OC>)
                .delete(states::delete::<SR, CR, AR, UR, PR, OC>),
        )
        // Cities
        .route(
            "/states/{state_id}/cities",
            get(cities::list::<SR, CR, AR, UR, PR, OC>)
                .post(cities::create::<SR, CR, AR, UR, PR, OC>),
        )
        .route(
            "/cities/{city_id}",
            get(cities::get::<SR, CR, AR, UR, PR, OC>)
                .put(cities::update::<SR, CR, AR, UR, PR, OC>)
                .delete(cities::delete::<SR, CR, AR, UR, PR, OC>),
        )
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<SR, CR, AR, UR, PR, OC>)
                .post(amenities::create::<SR, CR, AR, UR, PR, OC>),
        )
        .route(
            "/amenities/{amenity_id}",
            get(amenities::get::<SR, CR, AR, UR, PR, OC>)
                .put(amenities::update::<SR, CR, AR, UR, PR, OC>)
                .delete(amenities::delete::<SR, CR, AR, UR, PR, OC>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, CR, AR, UR, PR, OC>)
                .post(users::create::<SR, CR, AR, UR, PR, OC>),
        )
        .route(
            "/users/{user_id}",
            get(users::get::<SR, CR, AR, UR, PR, OC>)
                .put(users::update::<SR, CR, AR, UR, PR, OC>)
                .delete(users::delete::<SR, CR, AR, UR, PR, OC>),
        )
        // Places
        .route(
            "/cities/{city_id}/places",
            get(places::list::<SR, CR, AR, UR, PR, OC>)
                .post(places::create::<SR, CR, AR, UR, PR, OC>),
        )
        .route(
            "/places/{place_id}",
            get(places::get::<SR, CR, AR, UR, PR, OC>)
                .put(places::update::<SR, CR, AR, UR, PR, OC>)
                .delete(places::delete::<SR, CR, AR, UR, PR, OC>),
        )
}

/// Parse a path segment into a typed identifier.
///
/// A segment that is not a valid identifier cannot name a stored object, so
/// it is reported as not found rather than as a bad request.
fn parse_id<T: FromStr>(entity: &'static str, raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(HbnbError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        }))
    })
}

/// Body returned by every successful delete: an empty JSON object.
fn empty_object() -> axum::Json<serde_json::Map<String, serde_json::Value>> {
    axum::Json(serde_json::Map::new())
}
