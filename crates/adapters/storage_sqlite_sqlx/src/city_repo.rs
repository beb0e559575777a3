//! `SQLite` implementation of [`CityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::CityRepository;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`City`].
struct Wrapper(City);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(City {
            id: row::id(row, "id")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            state_id: row::id(row, "state_id")?,
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO cities (id, created_at, updated_at, state_id, name) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities ORDER BY created_at";
const SELECT_BY_STATE_ID: &str = "SELECT * FROM cities WHERE state_id = ? ORDER BY created_at";
const UPDATE: &str = "UPDATE cities SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";

/// `SQLite`-backed city repository.
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(
        &self,
        query: &'static str,
        state_id: Option<StateId>,
    ) -> Result<Vec<City>, HbnbError> {
        let mut query = sqlx::query_as::<_, Wrapper>(query);
        if let Some(state_id) = state_id {
            query = query.bind(state_id.to_string());
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

impl CityRepository for SqliteCityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(city.id.to_string())
                .bind(city.created_at.to_rfc3339())
                .bind(city.updated_at.to_rfc3339())
                .bind(city.state_id.to_string())
                .bind(&city.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn get_by_id(
        &self,
        id: CityId,
    ) -> impl Future<Output = Result<Option<City>, HbnbError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        self.fetch_all(SELECT_ALL, None)
    }

    fn find_by_state_id(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        self.fetch_all(SELECT_BY_STATE_ID, Some(state_id))
    }

    fn update(&self, city: City) -> impl Future<Output = Result<City, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&city.name)
                .bind(city.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Config, Database};
    use crate::state_repo::SqliteStateRepository;
    use hbnb_app::ports::StateRepository;
    use hbnb_domain::state::State;

    async fn setup() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    async fn seed_state(db: &Database, name: &str) -> State {
        let state = State::builder().name(name).build().unwrap();
        SqliteStateRepository::new(db.pool().clone())
            .create(state)
            .await
            .unwrap()
    }

    fn city(state: &State, name: &str) -> City {
        City::builder()
            .state_id(state.id)
            .name(name)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_city() {
        let db = setup().await;
        let state = seed_state(&db, "California").await;
        let repo = SqliteCityRepository::new(db.pool().clone());
        let sf = city(&state, "San Francisco");

        repo.create(sf.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(sf.id).await.unwrap(), Some(sf));
    }

    #[tokio::test]
    async fn should_reject_city_when_state_missing() {
        let db = setup().await;
        let repo = SqliteCityRepository::new(db.pool().clone());
        let orphan = City::builder()
            .state_id(StateId::new())
            .name("Nowhere")
            .build()
            .unwrap();

        let result = repo.create(orphan).await;

        assert!(matches!(result, Err(HbnbError::Storage(_))));
    }

    #[tokio::test]
    async fn should_find_cities_by_state() {
        let db = setup().await;
        let california = seed_state(&db, "California").await;
        let oregon = seed_state(&db, "Oregon").await;
        let repo = SqliteCityRepository::new(db.pool().clone());
        repo.create(city(&california, "San Francisco")).await.unwrap();
        repo.create(city(&california, "Fremont")).await.unwrap();
        repo.create(city(&oregon, "Portland")).await.unwrap();

        let cities = repo.find_by_state_id(california.id).await.unwrap();

        assert_eq!(cities.len(), 2);
        assert!(cities.iter().all(|c| c.state_id == california.id));
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_delete_cities_when_state_deleted() {
        let db = setup().await;
        let state = seed_state(&db, "California").await;
        let repo = SqliteCityRepository::new(db.pool().clone());
        let sf = repo.create(city(&state, "San Francisco")).await.unwrap();

        SqliteStateRepository::new(db.pool().clone())
            .delete(state.id)
            .await
            .unwrap();

        assert!(repo.get_by_id(sf.id).await.unwrap().is_none());
    }
}
