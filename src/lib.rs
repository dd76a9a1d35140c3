//! Chat Log Explorer - Parse and summarize UTF-16 chat log transcripts
//!
//! This library decodes a fixed binary chat log layout: a UTF-16LE transcript that
//! starts with a magic number, carries a header block framed by dash rows, and
//! continues with timestamped message lines. It supports:
//!
//! - Parsing an in-memory buffer into a header map and ordered message records
//! - Resuming message decoding from a previously recorded byte offset
//! - Reading and validating chat log files from disk
//! - Building a merged, newest-first index over a directory of logs
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chatlog_explorer::{ParseOptions, parse_chat_log_file};
//!
//! let log = parse_chat_log_file(Path::new("Local_20200102_030405.txt"), &ParseOptions::default())?;
//! println!("{} messages, resume at byte {}", log.messages.len(), log.byte_length);
//!
//! // Later, decode only what was appended since
//! let tail = parse_chat_log_file(
//!     Path::new("Local_20200102_030405.txt"),
//!     &ParseOptions::with_offset(log.byte_length),
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{FormatViolation, ParseError};
pub use indexer::build_index;
pub use models::{
    ChatLogHeader, ChatLogIndex, IndexedMessage, MessageRecord, ParseOptions, ParseResult,
    Timestamp,
};
pub use parsers::{ChatLogParser, parse_chat_log, parse_chat_log_file};
