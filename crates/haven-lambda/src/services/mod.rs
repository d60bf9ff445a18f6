//! Orchestration between the pure engines and the store.

pub mod assessments;
pub mod rewards;

use jiff::civil::Date;
use jiff::tz::TimeZone;

/// The UTC calendar day streaks are counted in.
pub fn today_utc() -> Date {
    jiff::Timestamp::now().to_zoned(TimeZone::UTC).date()
}
