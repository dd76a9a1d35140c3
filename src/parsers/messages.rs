use tracing::debug;

use crate::models::MessageRecord;
use crate::parsers::chatlog::TimestampParser;
use crate::parsers::text::{decode_utf16le, logical_lines, trim_field, units_to_string};

// Fixed-width `[ YYYY.MM.DD HH:mm:ss ]` column, then one separating space
const TIMESTAMP_COLUMN_WIDTH: usize = 23;
const SENDER_COLUMN_START: usize = 24;

/// Decode the message region into records, in line order
///
/// Each non-empty line contributes a record unless it lacks a `>` between sender and
/// text after the timestamp column. A timestamp that fails to parse never drops a line.
pub fn decode_messages(region: &[u8], parse_timestamp: TimestampParser) -> Vec<MessageRecord> {
    let units = decode_utf16le(region);
    let mut messages = Vec::new();
    let mut skipped = 0usize;

    for line in logical_lines(&units).filter(|line| !line.is_empty()) {
        match decode_line(line, parse_timestamp) {
            Some(message) => messages.push(message),
            None => skipped += 1,
        }
    }

    debug!(messages = messages.len(), skipped, "decoded chat log messages");

    messages
}

fn decode_line(line: &[u16], parse_timestamp: TimestampParser) -> Option<MessageRecord> {
    let body = units_to_string(line.get(SENDER_COLUMN_START..).unwrap_or_default());
    let (sender, text) = body.split_once('>').filter(|(_, text)| !text.is_empty())?;

    let column = units_to_string(&line[..line.len().min(TIMESTAMP_COLUMN_WIDTH)]);
    let timestamp = parse_timestamp(trim_field(&strip_bracket_glyph(&column)));

    Some(MessageRecord {
        timestamp,
        sender: trim_field(sender).to_string(),
        text: trim_field(text).to_string(),
    })
}

/// Removes the first `[` or `]` in the column together with the character after it
///
/// A bracket at the very end of the column has no following character and is kept.
fn strip_bracket_glyph(column: &str) -> String {
    let Some(start) = column.find(['[', ']']) else {
        return column.to_string();
    };

    let mut following = column[start + 1..].chars();
    match following.next() {
        Some(_) => format!("{}{}", &column[..start], following.as_str()),
        None => column.to_string(),
    }
}
