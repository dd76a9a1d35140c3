use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// A timestamp decoded from a chat log.
///
/// Malformed timestamps never fail a parse. They are kept as [`Timestamp::Unparseable`]
/// with the text that was fed to the date parser, and render as [`Timestamp::INVALID`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timestamp {
    Valid(DateTime<Utc>),
    Unparseable(String),
}

impl Timestamp {
    /// Rendering of a timestamp that could not be parsed
    pub const INVALID: &'static str = "Invalid date";

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(instant) => Some(*instant),
            Self::Unparseable(_) => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(instant) => {
                f.write_str(&instant.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Self::Unparseable(_) => f.write_str(Self::INVALID),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
