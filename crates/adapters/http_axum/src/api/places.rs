//! JSON REST handlers for places.

use axum::Json;
use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::place::{Place, PlaceBuilder, PlacePatch};

use super::{empty_object, parse_id};
use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Place>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Place>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => empty_object().into_response(),
        }
    }
}

/// `GET /api/v1/cities/{city_id}/places`
pub async fn list<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(city_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let city_id: CityId = parse_id("City", &city_id)?;
    let city = state.city_service.get_city(city_id).await?;
    let places = state.place_service.list_places(&city).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /api/v1/places/{place_id}`
pub async fn get<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id("Place", &id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `POST /api/v1/cities/{city_id}/places`
///
/// The city comes from the path and the owner from the body's `user_id`.
/// A missing city wins over any problem with the body.
pub async fn create<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(city_id): Path<String>,
    payload: Payload<PlaceBuilder>,
) -> Result<CreateResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let city_id: CityId = parse_id("City", &city_id)?;
    let city = state.city_service.get_city(city_id).await?;
    let builder = payload.into_inner()?;
    let created = state.place_service.create_place(&city, builder).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/places/{place_id}`
pub async fn update<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
    payload: Payload<PlacePatch>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id("Place", &id)?;
    let current = state.place_service.get_place(place_id).await?;
    let patch = payload.into_inner()?;
    let updated = state.place_service.update_place(current, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/places/{place_id}`
pub async fn delete<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let place_id: PlaceId = parse_id("Place", &id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(DeleteResponse::Ok)
}
