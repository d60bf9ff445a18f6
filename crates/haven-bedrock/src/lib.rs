//! haven-bedrock
//!
//! Text completion through Bedrock, and the assessment interpreter that
//! depends on it.

pub mod client;
pub mod completion;
pub mod error;
pub mod interpret;
