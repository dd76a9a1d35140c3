use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{ChatLogHeader, SESSION_STARTED_KEY};
use crate::parsers::chatlog::{KeyNormalizer, TimestampParser};
use crate::parsers::text::{decode_utf16le, logical_lines, trim_field, units_to_string};

/// Decode the header region into normalized `key: value` fields
///
/// Lines without a separator (dash rows, blank padding) are skipped. Later
/// duplicates of a key overwrite earlier ones. A non-empty `sessionStarted` value
/// is reinterpreted as a timestamp and replaced by its normalized rendering.
pub fn decode_header(
    region: &[u8],
    normalize_key: KeyNormalizer,
    parse_timestamp: TimestampParser,
) -> ChatLogHeader {
    let units = decode_utf16le(region);
    let mut fields = BTreeMap::new();
    let mut skipped = 0usize;

    for line in logical_lines(&units).filter(|line| !line.is_empty()) {
        let line = units_to_string(line);
        match split_field(&line) {
            Some((key, value)) => {
                fields.insert(normalize_key(trim_field(key)), trim_field(value).to_string());
            }
            None => skipped += 1,
        }
    }

    let session_started = match fields.get_mut(SESSION_STARTED_KEY) {
        Some(value) if !value.is_empty() => {
            let timestamp = parse_timestamp(value);
            *value = timestamp.to_string();
            Some(timestamp)
        }
        _ => None,
    };

    debug!(fields = fields.len(), skipped, "decoded chat log header");

    ChatLogHeader::new(fields, session_started)
}

/// Split on the first `:`; a colon with nothing after it is not a separator
fn split_field(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').filter(|(_, value)| !value.is_empty())
}
