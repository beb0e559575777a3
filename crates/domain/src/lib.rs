//! # hbnb-domain
//!
//! Pure domain model for the hbnb listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **States** and the **Cities** they contain
//! - Define **Amenities** (features a place can offer)
//! - Define **Users** (owners of places)
//! - Define **Places** (listings located in a city, owned by a user)
//! - Define the creation drafts and update patches for each of them, so
//!   required-field checks and immutable-field rules live next to the data
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod kind;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod state;
pub mod user;
