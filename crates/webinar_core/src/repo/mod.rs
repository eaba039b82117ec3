//! Persistent Store Adapter.
//!
//! # Responsibility
//! - Define the raw key-value contract over the durable medium.
//! - Provide typed decode-or-default reads on top of it.
//!
//! # Invariants
//! - Typed reads never fail: absence, decode failure and medium failure all
//!   yield the caller-supplied default.
//! - Writes and removes report medium failures to the caller.

pub mod kv_repo;
pub mod record_store;
