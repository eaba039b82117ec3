//! Raw key-value record contracts with SQLite and in-memory implementations.
//!
//! # Invariants
//! - Keys are plain strings; values are opaque structured text.
//! - `put_record` overwrites any previous value for the key.
//! - `remove_record` on a missing key succeeds.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Record store error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { key, source } => write!(f, "failed to encode record `{key}`: {source}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous key-value medium addressed by string keys.
pub trait KvRepository {
    fn get_record(&self, key: &str) -> RepoResult<Option<String>>;
    fn put_record(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove_record(&self, key: &str) -> RepoResult<()>;
}

impl<R: KvRepository + ?Sized> KvRepository for &R {
    fn get_record(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_record(key)
    }

    fn put_record(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).put_record(key, value)
    }

    fn remove_record(&self, key: &str) -> RepoResult<()> {
        (**self).remove_record(key)
    }
}

/// SQLite-backed durable records in the `kv_records` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get_record(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_record(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_records (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_record(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_records WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-local records; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKvRepository {
    records: RefCell<BTreeMap<String, String>>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvRepository for MemoryKvRepository {
    fn get_record(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn put_record(&self, key: &str, value: &str) -> RepoResult<()> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_record(&self, key: &str) -> RepoResult<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository};

    #[test]
    fn memory_repo_overwrites_and_removes() {
        let repo = MemoryKvRepository::new();
        assert_eq!(repo.get_record("k").unwrap(), None);

        repo.put_record("k", "1").unwrap();
        repo.put_record("k", "2").unwrap();
        assert_eq!(repo.get_record("k").unwrap().as_deref(), Some("2"));

        repo.remove_record("k").unwrap();
        repo.remove_record("k").unwrap();
        assert_eq!(repo.get_record("k").unwrap(), None);
    }

    #[test]
    fn shared_reference_sees_same_records() {
        let repo = MemoryKvRepository::new();
        let first = &repo;
        let second = &repo;
        first.put_record("k", "v").unwrap();
        assert_eq!(second.get_record("k").unwrap().as_deref(), Some("v"));
    }
}
