//! UTC offset lookup for an instant in a named time zone.

use chrono::{DateTime, Offset, TimeZone, Utc};

use crate::error::Result;
use crate::formatter::OffsetFormatter;

const SECONDS_IN_A_MINUTE: i32 = 60;

/// Signed UTC offset, in whole minutes, of the formatter's zone at `instant`.
///
/// Offsets need not be hour multiples: Asia/Kolkata reports 330. At exactly a
/// DST transition instant the new rule is in force; one millisecond earlier
/// still reports the old rule.
pub fn offset_minutes(instant: DateTime<Utc>, formatter: &OffsetFormatter) -> Result<i32> {
    let tz = formatter.tz()?;
    let offset = tz.offset_from_utc_datetime(&instant.naive_utc()).fix();
    Ok(offset.local_minus_utc() / SECONDS_IN_A_MINUTE)
}
