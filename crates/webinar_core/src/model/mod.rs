//! Domain model for the webinar catalog and visitor state.
//!
//! # Responsibility
//! - Define the static catalog and the three persisted state slices.
//! - Define the profile form and its input constraints.
//!
//! # Invariants
//! - Catalog items are immutable and fixed at compile time.
//! - Every state slice has a documented default used on absence or decode failure.

pub mod catalog;
pub mod profile_form;
pub mod state;
