//! Service status and object statistics.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
}

/// `GET /api/v1/status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<BTreeMap<&'static str, u64>>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/v1/stats`
///
/// # Errors
///
/// Fails with a storage error when a count cannot be read.
pub async fn stats<SR, CR, AR, UR, PR, OC>(
    State(state): State<AppState<SR, CR, AR, UR, PR, OC>>,
) -> Result<StatsResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let counts = state.stats_service.counts().await?;
    let body = counts
        .into_iter()
        .map(|(kind, count)| (kind.plural(), count))
        .collect();
    Ok(StatsResponse::Ok(Json(body)))
}
