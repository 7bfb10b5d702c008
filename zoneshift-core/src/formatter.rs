//! Wall-clock formatters, each bound to a single IANA time zone.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Fixed rendering layout: 4-digit year, 2-digit fields, 24-hour clock.
const WALL_CLOCK_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A wall-clock renderer bound to one IANA time zone.
///
/// Values are only constructible through [`OffsetFormatter::new`]; the private
/// field keeps look-alikes built elsewhere out of the offset APIs, so a
/// formatter accepted by those APIs is known to be properly constructed. The
/// bound zone never changes after construction. Callers are expected to build
/// one formatter per zone and reuse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFormatter {
    zone_id: String,
}

impl OffsetFormatter {
    /// Build a formatter bound to `zone_id`.
    ///
    /// The identifier is not validated here. An unrecognized zone surfaces as
    /// [`Error::UnsupportedZone`] on the first render or offset lookup.
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
        }
    }

    /// The IANA zone identifier this formatter is bound to.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Resolve the bound identifier against the IANA database.
    pub(crate) fn tz(&self) -> Result<Tz> {
        self.zone_id
            .parse()
            .map_err(|_| Error::UnsupportedZone(self.zone_id.clone()))
    }

    /// Render `instant` as wall-clock text in the bound zone, in the fixed
    /// `YYYY-MM-DD HH:mm:ss` 24-hour layout.
    pub fn format(&self, instant: DateTime<Utc>) -> Result<String> {
        let tz = self.tz()?;
        Ok(instant
            .with_timezone(&tz)
            .format(WALL_CLOCK_LAYOUT)
            .to_string())
    }
}

static UTC_FORMATTER: LazyLock<OffsetFormatter> =
    LazyLock::new(|| OffsetFormatter::new("UTC"));

static SYSTEM_FORMATTER: LazyLock<OffsetFormatter> = LazyLock::new(|| {
    OffsetFormatter::new(iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string()))
});

/// The process-wide UTC reference formatter.
pub fn utc_formatter() -> &'static OffsetFormatter {
    &UTC_FORMATTER
}

/// The process-wide formatter for the zone this process runs in.
///
/// The zone is detected once, on first use. When the platform zone cannot be
/// determined the formatter falls back to UTC.
pub fn system_formatter() -> &'static OffsetFormatter {
    &SYSTEM_FORMATTER
}
