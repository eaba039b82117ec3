//! SQLite bootstrap for the durable key-value medium.
//!
//! # Responsibility
//! - Open and configure SQLite connections holding the `kv_records` table.
//! - Bring the schema up to date before any record is touched.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - A store written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Name of the table that holds every persisted record.
pub const RECORD_TABLE: &str = "kv_records";

pub type DbResult<T> = Result<T, DbError>;

/// Failure of the SQLite record store.
#[derive(Debug)]
pub enum DbError {
    /// SQLite rejected a statement or connection.
    Sqlite(rusqlite::Error),
    /// The store was written by a build with a newer schema.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Whether retrying with a newer build could succeed.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::UnsupportedSchemaVersion { .. })
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "record store `{}` failed: {err}", RECORD_TABLE),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "record store `{}` has schema v{db_version}; this build reads up to v{latest_supported}",
                RECORD_TABLE
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

#[cfg(test)]
mod tests {
    use super::DbError;

    #[test]
    fn messages_name_the_record_table() {
        let err = DbError::UnsupportedSchemaVersion {
            db_version: 9,
            latest_supported: 1,
        };
        assert!(err.is_schema_mismatch());
        assert_eq!(
            err.to_string(),
            "record store `kv_records` has schema v9; this build reads up to v1"
        );

        let err = DbError::from(rusqlite::Error::InvalidQuery);
        assert!(!err.is_schema_mismatch());
        assert!(err.to_string().starts_with("record store `kv_records` failed: "));
    }
}
