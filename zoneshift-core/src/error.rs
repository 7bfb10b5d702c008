//! Error taxonomy for offset lookup and plain-date conversion.

use thiserror::Error;

/// Failures surfaced by the offset calculator and the plain-date converter.
///
/// Each variant carries a stable code (see [`Error::code`]) so callers can
/// branch or grep without matching on message text. Absent-argument and
/// wrong-formatter conditions have no variants: an instant is always a
/// well-formed `DateTime<Utc>` value, and an
/// [`OffsetFormatter`](crate::OffsetFormatter) cannot be built outside its
/// factory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The plain date string was empty.
    #[error("plain date string is required")]
    EmptyPlainDate,

    /// The plain date string did not match the accepted grammar, or named a
    /// calendar date or time of day that does not exist.
    #[error("malformed plain date string: {0:?}")]
    MalformedPlainDate(String),

    /// The zone identifier is not in the IANA database.
    #[error("unsupported time zone identifier: {0:?}")]
    UnsupportedZone(String),
}

impl Error {
    /// Stable identifying code, independent of message wording.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPlainDate => "EMPTY_PLAIN_DATE",
            Self::MalformedPlainDate(_) => "MALFORMED_PLAIN_DATE",
            Self::UnsupportedZone(_) => "UNSUPPORTED_ZONE",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
