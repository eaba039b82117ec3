//! Page initializers and interaction controllers.
//!
//! # Responsibility
//! - Render each page region from persisted state on page init.
//! - Turn one user gesture into one state transition plus the re-renders
//!   of the regions it affects.
//!
//! # Invariants
//! - Guests never mutate the joined set.
//! - Validation failures never mutate state.
//! - Logout clears the joined set and keeps the profile.

use crate::repo::kv_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod catalog_page;
pub mod profile_page;
pub mod surface;

pub type PageResult<T> = Result<T, PageError>;

/// Failure of a gesture handler.
#[derive(Debug)]
pub enum PageError {
    /// The medium rejected a write; regions were not re-rendered.
    Storage(RepoError),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "state write failed: {err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<RepoError> for PageError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}
