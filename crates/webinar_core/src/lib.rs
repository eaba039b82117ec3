//! State and view synchronization for the webinar catalog demo.
//! This crate is the single source of truth for visitor state invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use controller::catalog_page::{CatalogPage, JoinOutcome};
pub use controller::profile_page::ProfilePage;
pub use controller::surface::{Alert, AlertKind, CatalogSurface, Notification, ProfileSurface};
pub use controller::{PageError, PageResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{catalog, find_item, CatalogItem};
pub use model::profile_form::{ProfileField, ProfileForm, ProfileValidationError, PROFILE_ROLES};
pub use model::state::{AuthState, JoinedSet, ProfileRecord};
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use repo::record_store::RecordStore;
pub use service::state_service::{StateService, AUTH_KEY, JOINED_KEY, PROFILE_KEY};
pub use view::UiEvent;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
