//! haven-auth
//!
//! Bearer-token verification. Tokens are issued by the identity provider in
//! front of the app; this crate only checks them and extracts the subject.

pub mod error;
pub mod jwt;
