//! haven-storage
//!
//! S3 persistence for profiles, the activity ledger, badge awards and
//! assessment results. The [`store::WellnessStore`] trait is the seam the
//! API depends on; [`s3::S3Store`] backs it in production and
//! [`memory::MemoryStore`] in tests and local runs.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod state;
pub mod store;
