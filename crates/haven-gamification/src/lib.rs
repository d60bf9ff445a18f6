//! haven-gamification
//!
//! Points, streaks and badge unlocks. Pure functions over plain data: the
//! caller supplies the current profile, the event and the calendar day, and
//! persists whatever comes back.

pub mod activity;
pub mod badges;
pub mod error;
pub mod streak;
