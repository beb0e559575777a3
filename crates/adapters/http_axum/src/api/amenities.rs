//! JSON REST handlers for amenities.

use axum::Json;
use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::id::AmenityId;
use hbnb_domain::amenity::{Amenity, AmenityBuilder, AmenityPatch};

use super::{empty_object, parse_id};
use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Amenity>>),
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
    Ok(Json<Amenity>),
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
    Created(Json<Amenity>),
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

/// `GET /api/v1/amenities`
pub async fn list<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let amenities = state.amenity_service.list_amenities().await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `GET /api/v1/amenities/{amenity_id}`
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
    let amenity_id: AmenityId = parse_id("Amenity", &id)?;
    let found = state.amenity_service.get_amenity(amenity_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/amenities`
pub async fn create<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    payload: Payload<AmenityBuilder>,
) -> Result<CreateResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let builder = payload.into_inner()?;
    let created = state.amenity_service.create_amenity(builder).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/amenities/{amenity_id}`
pub async fn update<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
    payload: Payload<AmenityPatch>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let amenity_id: AmenityId = parse_id("Amenity", &id)?;
    let current = state.amenity_service.get_amenity(amenity_id).await?;
    let patch = payload.into_inner()?;
    let updated = state.amenity_service.update_amenity(current, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/amenities/{amenity_id}`
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
    let amenity_id: AmenityId = parse_id("Amenity", &id)?;
    state.amenity_service.delete_amenity(amenity_id).await?;
    Ok(DeleteResponse::Ok)
}
