//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1`
//!   (`/states`, `/states/{id}/cities`, `/cities/{id}/places`, `/amenities`,
//!   `/users`, `/status`, `/stats`, …)
//! - Turn request bodies into creation payloads and patches, rejecting
//!   anything that is not a non-empty JSON object
//! - Map application results and errors into HTTP status codes and JSON bodies
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod payload;
pub mod router;
pub mod state;
