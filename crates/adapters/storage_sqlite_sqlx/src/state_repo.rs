//! `SQLite` implementation of [`StateRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::StateRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::StateId;
use hbnb_domain::state::State;

use crate::error::StorageError;
use crate::row;

/// Wrapper for converting database rows into domain [`State`].
struct Wrapper(State);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<State> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(State {
            id: row::id(row, "id")?,
            created_at: row::timestamp(row, "created_at")?,
            updated_at: row::timestamp(row, "updated_at")?,
            name: row.try_get("name")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO states (id, created_at, updated_at, name) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM states WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM states ORDER BY created_at";
const UPDATE: &str = "UPDATE states SET name = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM states WHERE id = ?";

/// `SQLite`-backed state repository.
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StateRepository for SqliteStateRepository {
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(state.id.to_string())
                .bind(state.created_at.to_rfc3339())
                .bind(state.updated_at.to_rfc3339())
                .bind(&state.name)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(state)
        }
    }

    fn get_by_id(
        &self,
        id: StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&state.name)
                .bind(state.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(state)
        }
    }

    fn delete(&self, id: StateId) -> impl Future<Output = Result<(), HbnbError>> + Send {
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
