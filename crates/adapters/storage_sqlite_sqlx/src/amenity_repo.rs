//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::AmenityRepository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;

use crate::error::StorageError;
use crate::row;

struct Wrapper(Amenity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Amenity {
            id: row::id(row, "id")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, created_at, updated_at, name) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY created_at";
const UPDATE: &str = "UPDATE amenities SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(amenity.id.to_string())
                .bind(amenity.created_at.to_rfc3339())
                .bind(amenity.updated_at.to_rfc3339())
                .bind(&amenity.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        amenity: Amenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&amenity.name)
                .bind(amenity.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
