//! JSON REST handlers for states.

use axum::Json;
use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::id::StateId;
use hbnb_domain::state::{State, StateBuilder, StatePatch};

use super::{empty_object, parse_id};
use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<State>>),
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
    Ok(Json<State>),
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
    Created(Json<State>),
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

/// `GET /api/v1/states`
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
    let states = state.state_service.list_states().await?;
    Ok(ListResponse::Ok(Json(states)))
}

/// `GET /api/v1/states/{state_id}`
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
    let state_id: StateId = parse_id("State", &id)?;
    let found = state.state_service.get_state(state_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/states`
pub async fn create<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    payload: Payload<StateBuilder>,
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
    let created = state.state_service.create_state(builder).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/states/{state_id}`
pub async fn update<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
    payload: Payload<StatePatch>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let state_id: StateId = parse_id("State", &id)?;
    let current = state.state_service.get_state(state_id).await?;
    let patch = payload.into_inner()?;
    let updated = state.state_service.update_state(current, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/states/{state_id}`
///
/// Also removes the state's cities and their places.
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
    let state_id: StateId = parse_id("State", &id)?;
    state.state_service.delete_state(state_id).await?;
    Ok(DeleteResponse::Ok)
}
