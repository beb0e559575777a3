//! Axum router assembly.

use axum::Router;
use axum::http::Uri;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, ObjectCounter, PlaceRepository, StateRepository,
    UserRepository,
};
use hbnb_domain::error::{HbnbError, NotFoundError};

use crate::error::ApiError;
use crate::state::AppState;

/// The HTTP service: the API [`Router`] behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Build the top-level HTTP service.
///
/// Nests the API under `/api/v1` with a permissive [`CorsLayer`], answers
/// unknown paths with a JSON 404, and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level.
///
/// Trailing slashes are trimmed before routing, so `/api/v1/states/` and
/// `/api/v1/states` reach the same handler.
pub fn build<SR, CR, AR, UR, PR, OC>(state: AppState<SR, CR, AR, UR, PR, OC>) -> App
where
    SR: StateRepository + Send + Sync + 'static,
    CR: CityRepository + Send + Sync + 'static,
    AR: AmenityRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    OC: ObjectCounter + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest("/api/v1", crate::api::routes().layer(cors))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::from(HbnbError::from(NotFoundError {
        entity: "Route",
        id: uri.path().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use hbnb_adapter_storage_memory::InMemoryStorage;
    use hbnb_app::services::amenity_service::AmenityService;
    use hbnb_app::services::city_service::CityService;
    use hbnb_app::services::place_service::PlaceService;
    use hbnb_app::services::state_service::StateService;
    use hbnb_app::services::stats_service::StatsService;
    use hbnb_app::services::user_service::UserService;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> App {
        let storage = InMemoryStorage::new();
        build(AppState::new(
            StateService::new(storage.clone()),
            CityService::new(storage.clone()),
            AmenityService::new(storage.clone()),
            UserService::new(storage.clone()),
            PlaceService::new(storage.clone(), storage.clone()),
            StatsService::new(storage),
        ))
    }

    async fn send(
        app: &App,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(body) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &App, uri: &str, body: Value) -> Value {
        let (status, created) = send(app, Method::POST, uri, Some(&body.to_string())).await;
        assert_eq!(status, StatusCode::CREATED, "{created}");
        created
    }

    #[tokio::test]
    async fn should_report_ok_status() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "OK" }));
    }

    #[tokio::test]
    async fn should_report_zero_counts_when_store_empty() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/stats", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "amenities": 0,
                "cities": 0,
                "places": 0,
                "reviews": 0,
                "states": 0,
                "users": 0,
            })
        );
    }

    #[tokio::test]
    async fn should_return_json_not_found_when_route_unknown() {
        let (status, body) = send(&app(), Method::GET, "/api/v1/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn should_walk_state_through_its_lifecycle() {
        let app = app();
        let created = create(&app, "/api/v1/states", json!({ "name": "California" })).await;
        let uri = format!("/api/v1/states/{}", created["id"].as_str().unwrap());

        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_missing_body_for_every_create() {
        let app = app();
        let state = create(&app, "/api/v1/states", json!({ "name": "Oregon" })).await;
        let user = create(
            &app,
            "/api/v1/users",
            json!({ "email": "a@b.c", "password": "pw" }),
        )
        .await;
        let city = create(
            &app,
            &format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()),
            json!({ "name": "Portland" }),
        )
        .await;
        assert!(user["id"].is_string());

        let uris = [
            "/api/v1/states".to_string(),
            "/api/v1/amenities".to_string(),
            "/api/v1/users".to_string(),
            format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()),
            format!("/api/v1/cities/{}/places", city["id"].as_str().unwrap()),
        ];
        for uri in &uris {
            for body in [None, Some("not json"), Some("{}"), Some("[1, 2]")] {
                let (status, response) = send(&app, Method::POST, uri, body).await;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body:?}");
                assert_eq!(response, json!({ "error": "Not a JSON" }), "{uri} {body:?}");
            }
        }
    }

    #[tokio::test]
    async fn should_name_missing_field_when_creating() {
        let app = app();

        let cases = [
            ("/api/v1/states", json!({ "nom": "x" }), "Missing name"),
            ("/api/v1/amenities", json!({ "nom": "x" }), "Missing name"),
            ("/api/v1/users", json!({ "password": "pw" }), "Missing email"),
            ("/api/v1/users", json!({ "email": "a@b.c" }), "Missing password"),
        ];
        for (uri, body, message) in cases {
            let (status, response) = send(&app, Method::POST, uri, Some(&body.to_string())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], message);
        }
    }

    #[tokio::test]
    async fn should_reject_field_with_wrong_type() {
        let (status, body) = send(
            &app(),
            Method::POST,
            "/api/v1/states",
            Some(r#"{"name": 42}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid body: "));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_ids() {
        let app = app();
        let missing = "00000000-0000-4000-8000-000000000000";

        for entity in ["states", "cities", "amenities", "users", "places"] {
            for id in [missing, "not-a-uuid"] {
                let uri = format!("/api/v1/{entity}/{id}");
                let (status, body) = send(&app, Method::GET, &uri, None).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
                assert_eq!(body, json!({ "error": "Not found" }));

                let (status, _) = send(&app, Method::DELETE, &uri, None).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");

                let (status, _) = send(&app, Method::PUT, &uri, Some(r#"{"name": "x"}"#)).await;
                assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            }
        }
    }

    #[tokio::test]
    async fn should_check_existence_before_body_when_updating() {
        let (status, _) = send(
            &app(),
            Method::PUT,
            "/api/v1/amenities/00000000-0000-4000-8000-000000000000",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_keep_immutable_fields_when_updating() {
        let app = app();
        let created = create(&app, "/api/v1/amenities", json!({ "name": "Wifi" })).await;
        let uri = format!("/api/v1/amenities/{}", created["id"].as_str().unwrap());

        let body = json!({
            "id": "00000000-0000-4000-8000-000000000000",
            "created_at": "2000-01-01T00:00:00Z",
            "updated_at": "2000-01-01T00:00:00Z",
            "name": "Fast wifi",
        });
        let (status, updated) = send(&app, Method::PUT, &uri, Some(&body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Fast wifi");
        assert_eq!(updated["id"], created["id"]);
        assert_eq!(updated["created_at"], created["created_at"]);
        assert_eq!(updated["updated_at"], created["updated_at"]);
    }

    #[tokio::test]
    async fn should_reject_empty_update_body() {
        let app = app();
        let created = create(&app, "/api/v1/states", json!({ "name": "Utah" })).await;
        let uri = format!("/api/v1/states/{}", created["id"].as_str().unwrap());

        let (status, body) = send(&app, Method::PUT, &uri, Some("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not a JSON");
    }

    #[tokio::test]
    async fn should_never_serialize_password() {
        let app = app();
        let created = create(
            &app,
            "/api/v1/users",
            json!({ "email": "ada@example.com", "password": "secret", "first_name": "Ada" }),
        )
        .await;

        assert!(created.get("password").is_none());
        assert_eq!(created["first_name"], "Ada");
        assert_eq!(created["last_name"], "");

        let uri = format!("/api/v1/users/{}", created["id"].as_str().unwrap());
        let body = json!({ "email": "other@example.com", "last_name": "Lovelace" });
        let (status, updated) = send(&app, Method::PUT, &uri, Some(&body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["email"], "ada@example.com");
        assert_eq!(updated["last_name"], "Lovelace");
        assert!(updated.get("password").is_none());
    }

    #[tokio::test]
    async fn should_scope_cities_to_their_state() {
        let app = app();
        let state = create(&app, "/api/v1/states", json!({ "name": "California" })).await;
        let state_id = state["id"].as_str().unwrap();
        let cities_uri = format!("/api/v1/states/{state_id}/cities");

        let city = create(
            &app,
            &cities_uri,
            json!({ "name": "Fresno", "state_id": "ignored" }),
        )
        .await;
        assert_eq!(city["state_id"], state["id"]);

        let (status, listed) = send(&app, Method::GET, &cities_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed, json!([city]));

        let missing = "/api/v1/states/00000000-0000-4000-8000-000000000000/cities";
        let (status, _) = send(&app, Method::GET, missing, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::POST, missing, Some(r#"{"name": "x"}"#)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(&app, Method::DELETE, &format!("/api/v1/states/{state_id}"), None).await;
        let city_uri = format!("/api/v1/cities/{}", city["id"].as_str().unwrap());
        let (status, _) = send(&app, Method::GET, &city_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_create_place_with_defaults() {
        let app = app();
        let state = create(&app, "/api/v1/states", json!({ "name": "California" })).await;
        let city = create(
            &app,
            &format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()),
            json!({ "name": "San Francisco" }),
        )
        .await;
        let user = create(
            &app,
            "/api/v1/users",
            json!({ "email": "host@example.com", "password": "pw" }),
        )
        .await;
        let places_uri = format!("/api/v1/cities/{}/places", city["id"].as_str().unwrap());

        let place = create(
            &app,
            &places_uri,
            json!({ "user_id": user["id"], "name": "Loft", "number_rooms": 2 }),
        )
        .await;

        assert_eq!(place["city_id"], city["id"]);
        assert_eq!(place["user_id"], user["id"]);
        assert_eq!(place["number_rooms"], 2);
        assert_eq!(place["number_bathrooms"], 0);
        assert_eq!(place["description"], "");
        assert_eq!(place["latitude"], 0.0);

        let place_uri = format!("/api/v1/places/{}", place["id"].as_str().unwrap());
        let (status, fetched) = send(&app, Method::GET, &place_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, place);

        let (_, listed) = send(&app, Method::GET, &places_uri, None).await;
        assert_eq!(listed, json!([place]));
    }

    #[tokio::test]
    async fn should_validate_place_in_order() {
        let app = app();
        let state = create(&app, "/api/v1/states", json!({ "name": "California" })).await;
        let city = create(
            &app,
            &format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()),
            json!({ "name": "San Francisco" }),
        )
        .await;
        let places_uri = format!("/api/v1/cities/{}/places", city["id"].as_str().unwrap());

        let bad_city = "/api/v1/cities/00000000-0000-4000-8000-000000000000/places";
        for body in [None, Some("{}"), Some(r#"{"name": "Loft"}"#)] {
            let (status, _) = send(&app, Method::POST, bad_city, body).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        let (status, body) =
            send(&app, Method::POST, &places_uri, Some(r#"{"name": "Loft"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing user_id");

        let unknown_user = json!({ "user_id": "00000000-0000-4000-8000-000000000000" });
        let (status, _) = send(
            &app,
            Method::POST,
            &places_uri,
            Some(&unknown_user.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let user = create(
            &app,
            "/api/v1/users",
            json!({ "email": "host@example.com", "password": "pw" }),
        )
        .await;
        let no_name = json!({ "user_id": user["id"] });
        let (status, body) =
            send(&app, Method::POST, &places_uri, Some(&no_name.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing name");
    }

    #[tokio::test]
    async fn should_keep_place_owner_when_updating() {
        let app = app();
        let state = create(&app, "/api/v1/states", json!({ "name": "California" })).await;
        let city = create(
            &app,
            &format!("/api/v1/states/{}/cities", state["id"].as_str().unwrap()),
            json!({ "name": "San Francisco" }),
        )
        .await;
        let user = create(
            &app,
            "/api/v1/users",
            json!({ "email": "host@example.com", "password": "pw" }),
        )
        .await;
        let place = create(
            &app,
            &format!("/api/v1/cities/{}/places", city["id"].as_str().unwrap()),
            json!({ "user_id": user["id"], "name": "Loft" }),
        )
        .await;
        let place_uri = format!("/api/v1/places/{}", place["id"].as_str().unwrap());

        let body = json!({
            "user_id": "00000000-0000-4000-8000-000000000000",
            "city_id": "00000000-0000-4000-8000-000000000000",
            "price_by_night": 99,
            "latitude": 37.5,
        });
        let body = body.to_string();
        let (status, updated) = send(&app, Method::PUT, &place_uri, Some(&body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["user_id"], user["id"]);
        assert_eq!(updated["city_id"], city["id"]);
        assert_eq!(updated["price_by_night"], 99);
        assert_eq!(updated["latitude"], 37.5);
        assert_eq!(updated["name"], "Loft");
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/status")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_accept_trailing_slash_on_get() {
        let app = app();
        let nevada = create(&app, "/api/v1/states", json!({ "name": "Nevada" })).await;

        let (status, list) = send(&app, Method::GET, "/api/v1/states/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([nevada]));

        let uri = format!("/api/v1/states/{}/", nevada["id"].as_str().unwrap());
        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, nevada);
    }

    #[tokio::test]
    async fn should_accept_trailing_slash_on_post() {
        let app = app();

        let (status, state) = send(
            &app,
            Method::POST,
            "/api/v1/states/",
            Some(r#"{"name": "Oregon"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/v1/states/{}/cities/", state["id"].as_str().unwrap());
        let (status, city) = send(&app, Method::POST, &uri, Some(r#"{"name": "Salem"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(city["state_id"], state["id"]);
    }

    #[tokio::test]
    async fn should_return_payload_too_large_for_oversized_body() {
        let app = app();
        let body = json!({ "name": "x".repeat(3 * 1024 * 1024) }).to_string();

        let (status, error) = send(&app, Method::POST, "/api/v1/states", Some(&body)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(error, json!({ "error": "Payload too large" }));
    }
}
