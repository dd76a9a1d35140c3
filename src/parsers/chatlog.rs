use tracing::debug;

use crate::error::ParseError;
use crate::models::{ParseOptions, ParseResult, Timestamp};
use crate::parsers::header::decode_header;
use crate::parsers::layout::{locate_regions, validate_magic};
use crate::parsers::messages::decode_messages;
use crate::parsers::timestamps::parse_log_timestamp;
use crate::utils::to_lower_camel_case;

/// Turns a raw header key into its normalized field name
pub type KeyNormalizer = fn(&str) -> String;

/// Turns timestamp text into a [`Timestamp`]; must not panic on malformed input
pub type TimestampParser = fn(&str) -> Timestamp;

/// Chat log parser with pluggable key and timestamp normalization
///
/// The parser holds no state between calls and can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct ChatLogParser {
    normalize_key: KeyNormalizer,
    parse_timestamp: TimestampParser,
}

impl Default for ChatLogParser {
    fn default() -> Self {
        Self { normalize_key: to_lower_camel_case, parse_timestamp: parse_log_timestamp }
    }
}

impl ChatLogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_normalizer(mut self, normalize_key: KeyNormalizer) -> Self {
        self.normalize_key = normalize_key;
        self
    }

    pub fn with_timestamp_parser(mut self, parse_timestamp: TimestampParser) -> Self {
        self.parse_timestamp = parse_timestamp;
        self
    }

    /// Parse a complete chat log held in memory
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFormat`] if the magic number is missing or the
    /// header is not bracketed by two boundary rows. Malformed lines inside the
    /// regions are skipped and malformed timestamps become
    /// [`Timestamp::Unparseable`]; neither is an error.
    pub fn parse(&self, buffer: &[u8], options: &ParseOptions) -> Result<ParseResult, ParseError> {
        validate_magic(buffer)?;
        let layout = locate_regions(buffer, options.offset)?;

        let header =
            decode_header(layout.header_region(buffer), self.normalize_key, self.parse_timestamp);
        let messages = decode_messages(layout.message_region(buffer), self.parse_timestamp);

        debug!(
            byte_length = buffer.len(),
            header_fields = header.len(),
            messages = messages.len(),
            "parsed chat log"
        );

        Ok(ParseResult { header, messages, byte_length: buffer.len() })
    }
}

/// Parse a chat log buffer with the default normalizers
///
/// # Examples
///
/// ```
/// use chatlog_explorer::{ParseError, ParseOptions, parse_chat_log};
///
/// let result = parse_chat_log(b"not a chat log", &ParseOptions::default());
/// assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
/// ```
///
/// # Errors
///
/// See [`ChatLogParser::parse`].
pub fn parse_chat_log(buffer: &[u8], options: &ParseOptions) -> Result<ParseResult, ParseError> {
    ChatLogParser::default().parse(buffer, options)
}
