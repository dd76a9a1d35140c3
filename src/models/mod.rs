//! Data models for decoded chat logs.
//!
//! - [`ParseResult`] - Header, messages and byte length of one log
//! - [`ChatLogHeader`] - Normalized `key: value` metadata from the header block
//! - [`MessageRecord`] - One `[timestamp] sender > text` line
//! - [`Timestamp`] - A decoded instant, or the text that failed to decode
//! - [`ParseOptions`] - Caller options (message offset override)
//! - [`IndexedMessage`] / [`ChatLogIndex`] - Messages gathered from a directory of logs

pub mod chatlog;
pub mod index;
pub mod options;
pub mod timestamp;

pub use chatlog::{ChatLogHeader, MessageRecord, ParseResult, SESSION_STARTED_KEY};
pub use index::{ChatLogIndex, IndexedMessage};
pub use options::{ParseOptions, parse_offset};
pub use timestamp::Timestamp;
