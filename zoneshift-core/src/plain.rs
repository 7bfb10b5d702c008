//! Plain (zone-less) date/time strings and their conversion to instants.

use std::sync::LazyLock;

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::{Error, Result};
use crate::formatter::{OffsetFormatter, system_formatter};
use crate::offset::offset_minutes;

/// Accepted shapes: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, then an optional
/// `T`- or space-separated `HH:mm[:ss[.SSS]]` with a 1-3 digit fraction.
/// Anchored on both ends, so a trailing `Z`, zone name, or offset is rejected.
static PLAIN_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<year>\d{4})",
        r"(?:-(?P<month>\d{2})",
        r"(?:-(?P<day>\d{2})",
        r"(?:[T ](?P<hour>\d{2}):(?P<minute>\d{2})",
        r"(?::(?P<second>\d{2})",
        r"(?:\.(?P<fraction>\d{1,3}))?",
        r")?)?)?)?$",
    ))
    .expect("plain date grammar is valid")
});

/// Absolute instant denoted by `plain` read as wall-clock time in the
/// formatter's zone.
///
/// The string is first read in the zone this process runs in, giving a
/// provisional instant; both zone offsets are then looked up at that
/// provisional instant and the difference applied. Known limitation: for
/// wall-clock readings inside a DST transition's ambiguous or skipped window
/// in the target zone, the neighboring rule's offset may be used, since the
/// offsets are not re-derived at the corrected instant.
pub fn to_instant(plain: &str, formatter: &OffsetFormatter) -> Result<DateTime<Utc>> {
    to_instant_in(plain, formatter, system_formatter())
}

/// Like [`to_instant`], with the ambient-zone formatter passed explicitly
/// instead of taken from the process.
pub fn to_instant_in(
    plain: &str,
    formatter: &OffsetFormatter,
    ambient: &OffsetFormatter,
) -> Result<DateTime<Utc>> {
    if plain.is_empty() {
        return Err(Error::EmptyPlainDate);
    }
    let naive = parse_plain(plain)?;
    let provisional = resolve_in_zone(naive, ambient.tz()?);

    let ambient_offset = offset_minutes(provisional, ambient)?;
    let target_offset = offset_minutes(provisional, formatter)?;

    Ok(provisional + Duration::minutes(i64::from(ambient_offset - target_offset)))
}

/// Validate `plain` against the grammar and build the naive wall-clock value,
/// defaulting omitted fields to the start of their period.
fn parse_plain(plain: &str) -> Result<NaiveDateTime> {
    let malformed = || Error::MalformedPlainDate(plain.to_string());

    let caps = PLAIN_DATE_RE.captures(plain).ok_or_else(malformed)?;

    let year: i32 = caps["year"].parse().map_err(|_| malformed())?;
    let month: u32 = match caps.name("month") {
        Some(m) => m.as_str().parse().map_err(|_| malformed())?,
        None => 1,
    };
    let day: u32 = match caps.name("day") {
        Some(d) => d.as_str().parse().map_err(|_| malformed())?,
        None => 1,
    };
    let hour: u32 = match caps.name("hour") {
        Some(h) => h.as_str().parse().map_err(|_| malformed())?,
        None => 0,
    };
    let minute: u32 = match caps.name("minute") {
        Some(m) => m.as_str().parse().map_err(|_| malformed())?,
        None => 0,
    };
    let second: u32 = match caps.name("second") {
        Some(s) => s.as_str().parse().map_err(|_| malformed())?,
        None => 0,
    };
    // ".3" means 300ms: the fraction scales by its digit count.
    let millis: u32 = match caps.name("fraction") {
        Some(f) => {
            let digits = f.as_str();
            let value: u32 = digits.parse().map_err(|_| malformed())?;
            value * 10u32.pow(3 - digits.len() as u32)
        }
        None => 0,
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millis))
        .ok_or_else(malformed)
}

/// Resolve a naive wall-clock value in `tz` to an instant. Ambiguous local
/// times (fall-back overlap) take the earlier instant; local times skipped by
/// a spring-forward gap are read with the offset in force around the jump.
fn resolve_in_zone(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&naive).fix();
            Utc.from_utc_datetime(&(naive - offset))
        }
    }
}
