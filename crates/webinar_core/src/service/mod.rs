//! Domain state accessors.
//!
//! # Responsibility
//! - Expose typed get/set/clear for the auth, profile and joined slices.
//! - Keep controllers and renderers decoupled from storage details.

pub mod state_service;
