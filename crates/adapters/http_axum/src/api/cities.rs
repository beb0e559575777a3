//! JSON REST handlers for cities.
//!
//! Cities are listed and created through their state
//! (`/states/{state_id}/cities`) and addressed directly afterwards
//! (`/cities/{city_id}`).

use axum::Json;
use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::city::{City, CityBuilder, CityPatch};
use hbnb_domain::id::{CityId, StateId};

use super::{empty_object, parse_id};
use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<City>>),
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
    Ok(Json<City>),
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
    Created(Json<City>),
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

/// `GET /api/v1/states/{state_id}/cities`
pub async fn list<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(state_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let state_id: StateId = parse_id("State", &state_id)?;
    let parent = state.state_service.get_state(state_id).await?;
    let cities = state.city_service.list_cities(&parent).await?;
    Ok(ListResponse::Ok(Json(cities)))
}

/// `GET /api/v1/cities/{city_id}`
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
    let city_id: CityId = parse_id("City", &id)?;
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::Ok(Json(city)))
}

/// `POST /api/v1/states/{state_id}/cities`
///
/// The owning state comes from the path; a `state_id` in the body is ignored.
pub async fn create<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(state_id): Path<String>,
    payload: Payload<CityBuilder>,
) -> Result<CreateResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let state_id: StateId = parse_id("State", &state_id)?;
    let parent = state.state_service.get_state(state_id).await?;
    let builder = payload.into_inner()?;
    let created = state.city_service.create_city(&parent, builder).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/cities/{city_id}`
pub async fn update<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
    payload: Payload<CityPatch>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let city_id: CityId = parse_id("City", &id)?;
    let current = state.city_service.get_city(city_id).await?;
    let patch = payload.into_inner()?;
    let updated = state.city_service.update_city(current, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/cities/{city_id}`
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
    let city_id: CityId = parse_id("City", &id)?;
    state.city_service.delete_city(city_id).await?;
    Ok(DeleteResponse::Ok)
}
