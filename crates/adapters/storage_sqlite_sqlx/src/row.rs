//! Helpers shared by the row decoders.

use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hbnb_domain::time::{self, Timestamp};

fn decode_error(err: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

/// Read a text column holding a typed identifier.
pub(crate) fn id<T>(row: &SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw).map_err(decode_error)
}

/// Read a text column holding an RFC 3339 timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    time::parse(&raw).map_err(decode_error)
}
