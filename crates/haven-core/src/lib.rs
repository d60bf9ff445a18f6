//! haven-core
//!
//! Pure domain types and S3 key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the Haven system.

pub mod error;
pub mod keys;
pub mod models;
