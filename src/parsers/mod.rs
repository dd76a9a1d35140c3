//! Parser for UTF-16LE chat log files
//!
//! # Pipeline
//!
//! Parsing is a single forward pass over an immutable buffer:
//!
//! 1. [`layout::validate_magic`] checks for the magic number
//! 2. [`layout::locate_regions`] brackets the header between two boundary rows and
//!    finds where the messages start (optionally overridden by a caller offset)
//! 3. [`header::decode_header`] extracts `key: value` fields
//! 4. [`messages::decode_messages`] extracts `[timestamp] sender > text` lines
//!
//! # Error Handling Strategy
//!
//! - **Structural failures**: A missing magic number or header boundary fails the whole
//!   parse with [`ParseError::InvalidFormat`](crate::ParseError). No partial result is
//!   returned.
//!
//! - **Line-level anomalies**: Header lines without a `:` and message lines without a
//!   `>` are skipped silently. They are decoration (dash rows, banners, wrapped text)
//!   rather than corruption.
//!
//! - **Timestamps**: A timestamp that does not match the log layout is kept as
//!   [`Timestamp::Unparseable`](crate::Timestamp) so the message itself is never lost.
//!
//! - **Error propagation**: The in-memory core returns typed errors. The file layer
//!   ([`file::parse_chat_log_file`]) adds `anyhow` context on top.

pub mod chatlog;
pub mod file;
pub mod header;
pub mod layout;
pub mod messages;
pub mod text;
pub mod timestamps;

pub use chatlog::{ChatLogParser, KeyNormalizer, TimestampParser, parse_chat_log};
pub use file::parse_chat_log_file;
pub use layout::{HEADER_BOUNDARY, MAGIC_NUMBER};
pub use timestamps::parse_log_timestamp;
