use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::models::Timestamp;
use crate::parsers::text::trim_field;

/// Date-time layout used in headers and message columns, e.g. `2020.01.02 03:04:05`
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Parses a chat log timestamp as UTC
///
/// The text is trimmed and must start with [`LOG_TIMESTAMP_FORMAT`]. Anything after
/// the seconds field (such as the ` ]` closing a message column) is ignored. Text
/// that does not match yields [`Timestamp::Unparseable`] carrying the trimmed input.
pub fn parse_log_timestamp(raw: &str) -> Timestamp {
    let trimmed = trim_field(raw);
    match NaiveDateTime::parse_and_remainder(trimmed, LOG_TIMESTAMP_FORMAT) {
        Ok((naive, _remainder)) => Timestamp::Valid(Utc.from_utc_datetime(&naive)),
        Err(_) => Timestamp::Unparseable(trimmed.to_string()),
    }
}
