//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters must implement:
//!   - `StateRepository`, `CityRepository`, `AmenityRepository`,
//!     `UserRepository`, `PlaceRepository`: CRUD per object kind
//!   - `ObjectCounter`: per-kind counts for statistics
//! - Define **use-case services** the HTTP adapter drives:
//!   - list / get / create / update / delete for each object kind
//!   - parent checks (a city needs its state, a place needs its city and user)
//!   - statistics
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
