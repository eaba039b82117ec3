//! Typed accessors for the three persisted state slices.
//!
//! # Invariants
//! - Every getter re-reads the medium; nothing is cached between calls.
//! - Slices are independent; no cross-slice consistency is enforced here.

use crate::model::state::{AuthState, JoinedSet, ProfileRecord};
use crate::repo::kv_repo::{KvRepository, RepoResult};
use crate::repo::record_store::RecordStore;

/// Record key of the joined-items list.
pub const JOINED_KEY: &str = "joined_webinars";
/// Record key of the profile record.
pub const PROFILE_KEY: &str = "profile_data";
/// Record key of the auth record.
pub const AUTH_KEY: &str = "auth_state";

/// State accessors over an injected repository handle.
pub struct StateService<R: KvRepository> {
    store: RecordStore<R>,
}

impl<R: KvRepository> StateService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            store: RecordStore::new(repo),
        }
    }

    /// Returns the auth slice; logged out when absent or corrupt.
    pub fn get_auth(&self) -> AuthState {
        self.store.read(AUTH_KEY, AuthState::default())
    }

    pub fn set_auth(&self, auth: AuthState) -> RepoResult<()> {
        self.store.write(AUTH_KEY, &auth)
    }

    /// Returns the profile slice; an empty record when absent or corrupt.
    pub fn get_profile(&self) -> ProfileRecord {
        self.store.read(PROFILE_KEY, ProfileRecord::default())
    }

    /// Replaces the whole profile record.
    pub fn set_profile(&self, profile: &ProfileRecord) -> RepoResult<()> {
        self.store.write(PROFILE_KEY, profile)
    }

    /// Returns the joined slice; empty when absent or corrupt.
    pub fn get_joined(&self) -> JoinedSet {
        self.store.read(JOINED_KEY, JoinedSet::default())
    }

    pub fn set_joined(&self, joined: &JoinedSet) -> RepoResult<()> {
        self.store.write(JOINED_KEY, joined)
    }

    pub fn clear_joined(&self) -> RepoResult<()> {
        self.store.remove(JOINED_KEY)
    }
}
