//! # hbnbd: HBnB API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`hbnb.toml`, environment variables)
//! - Install the `tracing` subscriber
//! - Build the selected storage backend (`SQLite` pool + migrations, or
//!   in-memory maps)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use axum::ServiceExt;
use axum::extract::Request;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use hbnb_adapter_http_axum::router::{self, App};
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_memory::InMemoryStorage;
use hbnb_adapter_storage_sqlite_sqlx::{
    SqliteAmenityRepository, SqliteCityRepository, SqliteObjectCounter, SqlitePlaceRepository,
    SqliteStateRepository, SqliteUserRepository,
};
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::stats_service::StatsService;
use hbnb_app::services::user_service::UserService;

use crate::config::{Config, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.logging.filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let app = match config.storage.backend {
        StorageBackend::Sqlite => sqlite_app(&config.storage.database_url).await?,
        StorageBackend::Memory => memory_app(),
    };

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, backend = ?config.storage.backend, "hbnbd listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("hbnbd stopped");
    Ok(())
}

/// Wire every service to the `SQLite` adapter.
async fn sqlite_app(database_url: &str) -> Result<App, Box<dyn std::error::Error>> {
    let db = hbnb_adapter_storage_sqlite_sqlx::Config {
        database_url: database_url.to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let state_service = StateService::new(SqliteStateRepository::new(pool.clone()));
    let city_service = CityService::new(SqliteCityRepository::new(pool.clone()));
    let amenity_service = AmenityService::new(SqliteAmenityRepository::new(pool.clone()));
    let user_service = UserService::new(SqliteUserRepository::new(pool.clone()));
    let place_service = PlaceService::new(
        SqlitePlaceRepository::new(pool.clone()),
        SqliteUserRepository::new(pool.clone()),
    );
    let stats_service = StatsService::new(SqliteObjectCounter::new(pool));

    Ok(router::build(AppState::new(
        state_service,
        city_service,
        amenity_service,
        user_service,
        place_service,
        stats_service,
    )))
}

/// Wire every service to one shared in-memory store.
fn memory_app() -> App {
    let storage = InMemoryStorage::new();

    router::build(AppState::new(
        StateService::new(storage.clone()),
        CityService::new(storage.clone()),
        AmenityService::new(storage.clone()),
        UserService::new(storage.clone()),
        PlaceService::new(storage.clone(), storage.clone()),
        StatsService::new(storage),
    ))
}

/// Resolve on SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
