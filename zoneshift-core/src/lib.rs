//! zoneshift-core: UTC offsets for IANA time zones and plain-date conversion.
//!
//! Given any instant and a named time zone, compute the signed UTC offset in
//! minutes in force at that instant in that zone, and read "plain" (zone-less)
//! date/time strings as wall-clock time in a zone of the caller's choosing.

pub mod error;
pub mod formatter;
pub mod offset;
pub mod plain;

pub use error::{Error, Result};
pub use formatter::{OffsetFormatter, system_formatter, utc_formatter};
pub use offset::offset_minutes;
pub use plain::{to_instant, to_instant_in};
