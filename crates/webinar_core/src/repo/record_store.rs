//! Typed records with decode-or-default reads.

use crate::logging::sanitize_message;
use crate::repo::kv_repo::{KvRepository, RepoError, RepoResult};
use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

const MAX_LOGGED_ERROR_CHARS: usize = 120;

/// JSON-encoded records over any `KvRepository`.
pub struct RecordStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> RecordStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying raw repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Reads and decodes `key`, or returns `default`.
    ///
    /// Never fails. A missing record yields `default` silently; an
    /// undecodable record or a medium failure yields `default` and a warning.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.repo.get_record(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                warn!(
                    "event=record_read module=repo status=fallback key={} reason=medium_error error={}",
                    key,
                    sanitize_message(&err.to_string(), MAX_LOGGED_ERROR_CHARS)
                );
                return default;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=record_read module=repo status=fallback key={} reason=decode_failed error={}",
                    key,
                    sanitize_message(&err.to_string(), MAX_LOGGED_ERROR_CHARS)
                );
                default
            }
        }
    }

    /// Encodes `value` and overwrites `key`.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> RepoResult<()> {
        let encoded = serde_json::to_string(value).map_err(|source| RepoError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.repo.put_record(key, &encoded).inspect_err(|err| {
            error!("event=record_write module=repo status=error key={key} error={err}");
        })
    }

    /// Deletes `key`; a missing key is not an error.
    pub fn remove(&self, key: &str) -> RepoResult<()> {
        self.repo.remove_record(key).inspect_err(|err| {
            error!("event=record_remove module=repo status=error key={key} error={err}");
        })
    }
}
