//! `SQLite` implementation of [`PlaceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::place::Place;

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`Place`].
struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Place {
            id: row::id(row, "id")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            city_id: row::id(row, "city_id")?,
            user_id: row::id(row, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        }))
    }
}

const INSERT: &str = r"INSERT INTO places
    (id, created_at, updated_at, city_id, user_id, name, description,
     number_rooms, number_bathrooms, max_guest, price_by_night, latitude, longitude)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY created_at";
const SELECT_BY_CITY_ID: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY created_at";
const UPDATE: &str = r"UPDATE places SET
    name = ?, description = ?, number_rooms = ?, number_bathrooms = ?,
    max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?
    WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(place.id.to_string())
                .bind(place.created_at.to_rfc3339())
                .bind(place.updated_at.to_rfc3339())
                .bind(place.city_id.to_string())
                .bind(place.user_id.to_string())
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_city_id(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY_ID)
                .bind(city_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.number_rooms)
                .bind(place.number_bathrooms)
                .bind(place.max_guest)
                .bind(place.price_by_night)
                .bind(place.latitude)
                .bind(place.longitude)
                .bind(place.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(place)
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
