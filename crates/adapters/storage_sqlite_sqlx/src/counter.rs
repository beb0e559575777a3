//! `SQLite` implementation of [`ObjectCounter`].

use std::future::Future;

use sqlx::SqlitePool;

use hbnb_app::ports::ObjectCounter;
use hbnb_domain::error::HbnbError;
use hbnb_domain::kind::EntityKind;

use crate::error::StorageError;

/// Counts rows in the table backing each [`EntityKind`].
pub struct SqliteObjectCounter {
    pool: SqlitePool,
}

impl SqliteObjectCounter {
    /// Create a new counter using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ObjectCounter for SqliteObjectCounter {
    fn count(&self, kind: EntityKind) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        // table names come from a closed enum, never from input
        let query = format!("SELECT COUNT(*) FROM {}", kind.plural());
        async move {
            let (count,): (i64,) = sqlx::query_as(&query)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).unwrap_or_default())
        }
    }
}
