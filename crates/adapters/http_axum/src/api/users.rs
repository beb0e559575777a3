//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::id::UserId;
use hbnb_domain::user::{User, UserBuilder, UserPatch};

use super::{empty_object, parse_id};
use crate::error::ApiError;
use crate::payload::Payload;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
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
    Created(Json<User>),
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

/// `GET /api/v1/users`
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
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/v1/users/{user_id}`
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
    let user_id: UserId = parse_id("User", &id)?;
    let found = state.user_service.get_user(user_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/users`
pub async fn create<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    payload: Payload<UserBuilder>,
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
    let created = state.user_service.create_user(builder).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/v1/users/{user_id}`
pub async fn update<SR, CR, AR, UR, PR, OC>(
    AxumState(state): AxumState<AppState<SR, CR, AR, UR, PR, OC>>,
    Path(id): Path<String>,
    payload: Payload<UserPatch>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let user_id: UserId = parse_id("User", &id)?;
    let current = state.user_service.get_user(user_id).await?;
    let patch = payload.into_inner()?;
    let updated = state.user_service.update_user(current, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/users/{user_id}`
///
/// Also removes every place the user owns.
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
    let user_id: UserId = parse_id("User", &id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(DeleteResponse::Ok)
}
