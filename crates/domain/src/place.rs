//! Place: a listing located in a [`City`](crate::city::City) and owned by a
//! [`User`](crate::user::User).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, NotFoundError, ValidationError};
use crate::id::{CityId, PlaceId, UserId};
use crate::time::{self, Timestamp};

/// A rentable place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Overwrite every field the patch carries.
    ///
    /// `city_id` and `user_id` are fixed at creation and are not patchable.
    pub fn apply(&mut self, patch: PlacePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(number_rooms) = patch.number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = patch.number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = patch.max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = patch.price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
    }
}

/// Step-by-step builder for [`Place`]; also the creation payload.
///
/// `user_id` is kept as the raw string the client sent: a value that is not a
/// valid identifier cannot name an existing user and is reported as such by
/// [`PlaceBuilder::user`] rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaceBuilder {
    #[serde(skip)]
    city_id: Option<CityId>,
    user_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    number_rooms: Option<u32>,
    number_bathrooms: Option<u32>,
    max_guest: Option<u32>,
    price_by_night: Option<u32>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PlaceBuilder {
    #[must_use]
    pub fn city_id(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn number_rooms(mut self, number_rooms: u32) -> Self {
        self.number_rooms = Some(number_rooms);
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, price_by_night: u32) -> Self {
        self.price_by_night = Some(price_by_night);
        self
    }

    /// Resolve the owning user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `user_id` is absent and
    /// [`HbnbError::NotFound`] when it is not a valid user identifier.
    pub fn user(&self) -> Result<UserId, HbnbError> {
        let raw = self
            .user_id
            .as_deref()
            .ok_or(ValidationError::MissingField("user_id"))?;
        UserId::from_str(raw).map_err(|_| {
            NotFoundError {
                entity: "User",
                id: raw.to_string(),
            }
            .into()
        })
    }

    /// Consume the builder and return a fresh [`Place`].
    ///
    /// # Errors
    ///
    /// Same as [`PlaceBuilder::user`], then [`ValidationError::MissingField`]
    /// for `name` and `city_id`.
    pub fn build(self) -> Result<Place, HbnbError> {
        let user_id = self.user()?;
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let city_id = self
            .city_id
            .ok_or(ValidationError::MissingField("city_id"))?;
        let now = time::now();
        Ok(Place {
            id: PlaceId::new(),
            created_at: now,
            updated_at: now,
            city_id,
            user_id,
            name,
            description: self.description.unwrap_or_default(),
            number_rooms: self.number_rooms.unwrap_or_default(),
            number_bathrooms: self.number_bathrooms.unwrap_or_default(),
            max_guest: self.max_guest.unwrap_or_default(),
            price_by_night: self.price_by_night.unwrap_or_default(),
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
        })
    }
}

/// Mutable fields of a [`Place`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> PlaceBuilder {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_build_place_with_defaults() {
        let city_id = CityId::new();
        let user_id = UserId::new();
        let place = Place::builder()
            .city_id(city_id)
            .user_id(user_id)
            .name("Cozy loft")
            .build()
            .unwrap();

        assert_eq!(place.city_id, city_id);
        assert_eq!(place.user_id, user_id);
        assert_eq!(place.description, "");
        assert_eq!(place.number_rooms, 0);
        assert!(place.latitude.abs() < f64::EPSILON);
    }

    #[test]
    fn should_report_missing_user_id_before_name() {
        let result = payload("{}").city_id(CityId::new()).build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("user_id")))
        ));
    }

    #[test]
    fn should_report_unparsable_user_id_as_not_found() {
        let builder = payload(r#"{"user_id":"nobody","name":"Hut"}"#);
        assert!(matches!(builder.user(), Err(HbnbError::NotFound(_))));
    }

    #[test]
    fn should_report_missing_name() {
        let body = format!(r#"{{"user_id":"{}"}}"#, UserId::new());
        let result = payload(&body).city_id(CityId::new()).build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("name")))
        ));
    }

    #[test]
    fn should_read_optional_numbers_from_payload() {
        let body = format!(
            r#"{{"user_id":"{}","name":"Villa","number_rooms":4,"latitude":37.5}}"#,
            UserId::new()
        );
        let place = payload(&body).city_id(CityId::new()).build().unwrap();
        assert_eq!(place.number_rooms, 4);
        assert!((place.latitude - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_reject_negative_room_count() {
        let result: Result<PlaceBuilder, _> = serde_json::from_str(r#"{"number_rooms":-1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_patch_only_mutable_fields() {
        let city_id = CityId::new();
        let user_id = UserId::new();
        let mut place = Place::builder()
            .city_id(city_id)
            .user_id(user_id)
            .name("Cabin")
            .price_by_night(80)
            .build()
            .unwrap();
        let patch: PlacePatch = serde_json::from_str(&format!(
            r#"{{"price_by_night":95,"city_id":"{}","user_id":"{}"}}"#,
            CityId::new(),
            UserId::new()
        ))
        .unwrap();

        place.apply(patch);

        assert_eq!(place.price_by_night, 95);
        assert_eq!(place.name, "Cabin");
        assert_eq!(place.city_id, city_id);
        assert_eq!(place.user_id, user_id);
    }
}
